//! Fixed in-memory user directory backing the login and registration mocks.

use chrono::{DateTime, TimeZone, Utc};

/// Directory record, including the stored password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    /// User ID
    pub id: &'static str,
    /// Full name
    pub name: &'static str,
    /// Email address, stored lowercase
    pub email: &'static str,
    /// Phone number
    pub phone: &'static str,
    /// Stored password
    pub password: &'static str,
    /// Unmasked Aadhaar number
    pub aadhaar_number: &'static str,
    /// Join date as (year, month, day)
    joined: (i32, u32, u32),
}

impl DirectoryUser {
    /// When the user joined, at midnight UTC.
    pub fn joined_at(&self) -> DateTime<Utc> {
        let (year, month, day) = self.joined;
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }
}

const USERS: &[DirectoryUser] = &[
    DirectoryUser {
        id: "u1",
        name: "Aarav Sharma",
        email: "aarav.sharma@example.com",
        phone: "9876543210",
        password: "Aarav@2024",
        aadhaar_number: "234567890123",
        joined: (2023, 4, 12),
    },
    DirectoryUser {
        id: "u2",
        name: "Priya Patel",
        email: "priya.patel@example.com",
        phone: "9123456780",
        password: "Priya#Secure1",
        aadhaar_number: "345678901234",
        joined: (2023, 7, 3),
    },
    DirectoryUser {
        id: "u3",
        name: "Rohan Iyer",
        email: "rohan.iyer@example.com",
        phone: "9988776655",
        password: "RohanI!789",
        aadhaar_number: "456789012345",
        joined: (2024, 1, 21),
    },
    DirectoryUser {
        id: "u4",
        name: "Ananya Gupta",
        email: "ananya.gupta@example.com",
        phone: "9012345678",
        password: "Ananya$55",
        aadhaar_number: "567890123456",
        joined: (2024, 3, 9),
    },
];

/// All directory users.
pub fn demo_users() -> &'static [DirectoryUser] {
    USERS
}

/// Look a user up by email, ignoring case and surrounding whitespace.
pub fn find_by_email(email: &str) -> Option<&'static DirectoryUser> {
    let email = email.trim();
    USERS.iter().find(|u| u.email.eq_ignore_ascii_case(email))
}

/// Look a user up by ID.
pub fn find_by_id(id: &str) -> Option<&'static DirectoryUser> {
    USERS.iter().find(|u| u.id == id)
}

/// Whether an email address is already registered.
pub fn email_taken(email: &str) -> bool {
    find_by_email(email).is_some()
}
