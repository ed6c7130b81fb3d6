//! Placeholder contact data for sandbox domain registrations.
//!
//! Domain create and update take contacts as flat `<Role>_<Field>` parameters,
//! e.g. `Registrant_FirstName` or `Billing_PostalCode`. The generator here fills
//! every mandatory field for all four roles with plausible US-English values.
//!
//! ```
//! use internetbs_sdk_rs::contact::{ContactDataGenerator, make_fake_contact_data_with_email};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let contacts = make_fake_contact_data_with_email("hostmaster@example.test");
//! assert_eq!(contacts["Admin_Email"], "hostmaster@example.test");
//!
//! // Seeded generator for repeatable data
//! let mut generator = ContactDataGenerator::new(StdRng::seed_from_u64(7));
//! let contacts = generator.contact_data_with_email("hostmaster@example.test");
//! assert_eq!(contacts.len(), 32);
//! ```

use crate::models::Params;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::fmt;

/// Phone number given to every generated contact
pub const PLACEHOLDER_PHONE_NUMBER: &str = "+1.2025550129";

/// Contact roles attached to a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRole {
    Registrant,
    Admin,
    Technical,
    Billing,
}

impl ContactRole {
    pub const ALL: [ContactRole; 4] = [
        ContactRole::Registrant,
        ContactRole::Admin,
        ContactRole::Technical,
        ContactRole::Billing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Registrant => "Registrant",
            ContactRole::Admin => "Admin",
            ContactRole::Technical => "Technical",
            ContactRole::Billing => "Billing",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields every contact role must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Street,
    City,
    CountryCode,
    PostalCode,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::PhoneNumber,
        ContactField::Street,
        ContactField::City,
        ContactField::CountryCode,
        ContactField::PostalCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "FirstName",
            ContactField::LastName => "LastName",
            ContactField::Email => "Email",
            ContactField::PhoneNumber => "PhoneNumber",
            ContactField::Street => "Street",
            ContactField::City => "City",
            ContactField::CountryCode => "CountryCode",
            ContactField::PostalCode => "PostalCode",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter name for a role/field pair, e.g. `Admin_City`
pub fn contact_key(role: ContactRole, field: ContactField) -> String {
    format!("{}_{}", role, field)
}

/// Generates fake contacts from the random source it owns
pub struct ContactDataGenerator<R: Rng> {
    rng: R,
}

impl ContactDataGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ContactDataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a full contact mapping for all roles.
    ///
    /// One person is generated and shared by every role.
    pub fn contact_data_with_email(&mut self, email: &str) -> Params {
        let person: Vec<(ContactField, String)> = ContactField::ALL
            .into_iter()
            .map(|field| (field, self.value_for(field, email)))
            .collect();

        let mut result = Params::new();
        for role in ContactRole::ALL {
            for (field, value) in &person {
                result.insert(contact_key(role, *field), value.clone());
            }
        }
        result
    }

    fn value_for(&mut self, field: ContactField, email: &str) -> String {
        match field {
            ContactField::FirstName => self.pick(&FIRST_NAMES),
            ContactField::LastName => self.pick(&LAST_NAMES),
            ContactField::Email => email.to_string(),
            ContactField::PhoneNumber => PLACEHOLDER_PHONE_NUMBER.to_string(),
            ContactField::Street => {
                let number: u32 = self.rng.gen_range(1..10000);
                let name = self.pick(&STREET_NAMES);
                let suffix = self.pick(&STREET_SUFFIXES);
                format!("{number} {name} {suffix}")
            }
            ContactField::City => self.pick(&CITIES),
            ContactField::CountryCode => self.pick(&COUNTRY_CODES),
            ContactField::PostalCode => format!("{:05}", self.rng.gen_range(501..100000)),
        }
    }

    fn pick(&mut self, words: &[&str]) -> String {
        words
            .choose(&mut self.rng)
            .map(|w| w.to_string())
            .unwrap_or_default()
    }
}

/// Contact mapping for all four roles, generated with a fresh random source
pub fn make_fake_contact_data_with_email(email: &str) -> Params {
    ContactDataGenerator::from_entropy().contact_data_with_email(email)
}

const FIRST_NAMES: [&str; 32] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark", "Sandra",
    "Steven", "Ashley", "Kevin", "Donna",
];

const LAST_NAMES: [&str; 32] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young",
];

const STREET_NAMES: [&str; 20] = [
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Sunset", "Lincoln", "Jackson", "Ridge", "Willow", "Chestnut", "Franklin", "Highland",
    "Meadow", "River",
];

const STREET_SUFFIXES: [&str; 10] = [
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

const CITIES: [&str; 20] = [
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
    "Burlington", "Manchester", "Milton", "Newport", "Auburn",
];

const COUNTRY_CODES: [&str; 24] = [
    "US", "CA", "MX", "GB", "IE", "FR", "DE", "NL", "BE", "CH", "AT", "IT", "ES", "PT", "SE", "NO",
    "DK", "FI", "PL", "AU", "NZ", "JP", "BR", "AR",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_and_fields_present() {
        let contacts = make_fake_contact_data_with_email("a@b.test");
        assert_eq!(contacts.len(), 32);

        for role in ContactRole::ALL {
            for field in ContactField::ALL {
                assert!(contacts.contains_key(&contact_key(role, field)));
            }
        }
    }

    #[test]
    fn test_email_and_phone_fixed() {
        let contacts = make_fake_contact_data_with_email("a@b.test");
        for role in ContactRole::ALL {
            assert_eq!(contacts[&contact_key(role, ContactField::Email)], "a@b.test");
            assert_eq!(
                contacts[&contact_key(role, ContactField::PhoneNumber)],
                PLACEHOLDER_PHONE_NUMBER
            );
        }
    }

    #[test]
    fn test_roles_share_one_person() {
        let mut generator = ContactDataGenerator::new(StdRng::seed_from_u64(42));
        let contacts = generator.contact_data_with_email("a@b.test");

        for field in ContactField::ALL {
            let registrant = &contacts[&contact_key(ContactRole::Registrant, field)];
            for role in ContactRole::ALL {
                assert_eq!(&contacts[&contact_key(role, field)], registrant);
            }
            assert!(!registrant.is_empty());
        }
    }

    #[test]
    fn test_seeded_generator_is_repeatable() {
        let first = ContactDataGenerator::new(StdRng::seed_from_u64(7)).contact_data_with_email("x@y.test");
        let second = ContactDataGenerator::new(StdRng::seed_from_u64(7)).contact_data_with_email("x@y.test");
        assert_eq!(first, second);
    }

    #[test]
    fn test_postal_code_format() {
        let mut generator = ContactDataGenerator::new(StdRng::seed_from_u64(1));
        for _ in 0..20 {
            let contacts = generator.contact_data_with_email("a@b.test");
            let code = &contacts["Billing_PostalCode"];
            assert_eq!(code.len(), 5);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_contact_key_format() {
        assert_eq!(
            contact_key(ContactRole::Technical, ContactField::CountryCode),
            "Technical_CountryCode"
        );
    }
}
