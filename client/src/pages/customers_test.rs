use super::*;
use crate::net::types::NewCustomer;

fn customer(name: &str, email: &str) -> Customer {
    Customer {
        id: 1,
        profile: NewCustomer { name: name.to_owned(), email: email.to_owned(), ..NewCustomer::default() },
        created_at: None,
    }
}

#[test]
fn matches_query_checks_name_and_email_case_insensitively() {
    let c = customer("Asha Rao", "asha.rao@example.in");
    assert!(matches_query(&c, ""));
    assert!(matches_query(&c, "  "));
    assert!(matches_query(&c, "ASHA"));
    assert!(matches_query(&c, "example.in"));
    assert!(!matches_query(&c, "ravi"));
}

#[test]
fn display_age_falls_back_to_stored_age() {
    let mut c = customer("Asha", "a@b.in");
    assert_eq!(display_age(&c), MISSING);
    c.profile.age = Some(41);
    assert_eq!(display_age(&c), "41");
    c.profile.date_of_birth = Some("not a date".to_owned());
    assert_eq!(display_age(&c), "41");
}
