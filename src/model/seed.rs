//! Seed Data
//!
//! Everything the store holds at startup. The data lives in process memory
//! only and is rebuilt from these tables on every page load; losing it on
//! reload is intentional.

use super::{
    Features, ListingStatus, ListingType, Neighborhood, Property, PropertyType, Role, User,
};

/// Demo accounts. The login page surfaces these credentials as a hint.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "dealer@example.com".into(),
            password: "password123".into(),
            role: Role::PropertyDealer,
            name: "John Dealer".into(),
            phone: "+1-555-0123".into(),
        },
        User {
            id: 2,
            email: "customer@example.com".into(),
            password: "password123".into(),
            role: Role::Customer,
            name: "Jane Customer".into(),
            phone: "+1-555-0124".into(),
        },
    ]
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            address: "123 Commonwealth Ave, Back Bay".into(),
            neighborhood: "Back Bay".into(),
            price: 850_000,
            bedrooms: 3,
            bathrooms: 2,
            sqft: 1500,
            property_type: PropertyType::Condo,
            listing_type: ListingType::Sale,
            dealer_id: 1,
            status: ListingStatus::Available,
            features: Features {
                crim: 0.02731,
                zn: 0.0,
                indus: 7.07,
                chas: 0.0,
                nox: 0.469,
                rm: 6.421,
                age: 78.9,
                dis: 4.9671,
                rad: 2.0,
                tax: 242.0,
                ptratio: 17.8,
                b: 396.9,
                lstat: 9.14,
            },
        },
        Property {
            id: 2,
            address: "456 Beacon St, Beacon Hill".into(),
            neighborhood: "Beacon Hill".into(),
            price: 1_200_000,
            bedrooms: 4,
            bathrooms: 3,
            sqft: 2200,
            property_type: PropertyType::Townhouse,
            listing_type: ListingType::Sale,
            dealer_id: 1,
            status: ListingStatus::Available,
            features: Features {
                crim: 0.02729,
                zn: 0.0,
                indus: 7.07,
                chas: 0.0,
                nox: 0.469,
                rm: 7.185,
                age: 61.1,
                dis: 4.9671,
                rad: 2.0,
                tax: 242.0,
                ptratio: 17.8,
                b: 392.83,
                lstat: 4.03,
            },
        },
    ]
}

pub fn neighborhoods() -> Vec<Neighborhood> {
    [
        ("Allston", 42.3584, -71.137, 45),
        ("Back Bay", 42.3505, -71.0763, 78),
        ("Beacon Hill", 42.3588, -71.0707, 23),
        ("Brighton", 42.348, -71.1656, 67),
        ("Charlestown", 42.3779, -71.061, 34),
        ("Chinatown", 42.3511, -71.0624, 12),
        ("Dorchester", 42.3025, -71.0736, 156),
        ("Downtown", 42.3589, -71.0571, 89),
        ("East Boston", 42.3706, -71.037, 78),
        ("Fenway", 42.3467, -71.0972, 45),
        ("Hyde Park", 42.2553, -71.1256, 67),
        ("Jamaica Plain", 42.3097, -71.1061, 89),
        ("North End", 42.3647, -71.0542, 34),
        ("Roxbury", 42.3143, -71.094, 123),
        ("South Boston", 42.3341, -71.0486, 98),
        ("South End", 42.3396, -71.0703, 87),
        ("West End", 42.3648, -71.0674, 23),
        ("West Roxbury", 42.2795, -71.1597, 56),
    ]
    .into_iter()
    .map(|(name, lat, lng, property_count)| Neighborhood {
        name: name.to_string(),
        lat,
        lng,
        property_count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_user_emails_are_unique() {
        let users = users();
        for (i, a) in users.iter().enumerate() {
            for b in &users[i + 1..] {
                assert_ne!(a.email, b.email);
            }
        }
    }

    #[test]
    fn seed_properties_reference_seeded_dealers() {
        let dealer_ids: Vec<u32> = users()
            .iter()
            .filter(|u| u.role == Role::PropertyDealer)
            .map(|u| u.id)
            .collect();
        for property in properties() {
            assert!(dealer_ids.contains(&property.dealer_id));
        }
    }

    #[test]
    fn all_eighteen_neighborhoods_present() {
        assert_eq!(neighborhoods().len(), 18);
    }
}
