use chrono::NaiveDate;
use serde_json::json;
use shared_types::{
    Appointment, Book, Case, Counsel, Expense, Searchable, SofaItem, StorageItem, Task,
};

/// Fixed "today" used by every date-dependent test. A Monday.
pub fn today() -> NaiveDate {
    date(2026, 10, 19)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// IDs of a filtered view, in order.
pub fn ids<T: Searchable>(records: &[&T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

pub fn make_case(id: &str, client_name: &str) -> Case {
    Case {
        id: id.to_string(),
        client_name: client_name.to_string(),
        ..Default::default()
    }
}

/// Cases deserialized the way rows arrive from the backend.
pub fn seed_cases() -> Vec<Case> {
    serde_json::from_value(json!([
        {
            "id": "c1",
            "client_name": "Rajesh Mehta",
            "file_no": "118/2025",
            "parties_name": "Mehta v. Union of India",
            "case_type": "Writ Petition",
            "district": "Pune",
            "status": "active",
            "stage": "arguments",
            "circulation_status": "circulated",
            "next_date": "2026-10-21",
            "interim_relief": "favor"
        },
        {
            "id": "c2",
            "client_name": "Sunita Bose",
            "file_no": "7",
            "parties_name": "Bose v. Kolkata Municipal Corp.",
            "case_type": "Civil Suit",
            "district": "Kolkata",
            "status": "pending",
            "stage": "evidence",
            "circulation_status": "circulated",
            "next_date": "2026-10-12",
            "interim_relief": "against"
        },
        {
            "id": "c3",
            "client_name": "Arora Textiles Pvt. Ltd.",
            "file_no": "42",
            "parties_name": "Arora Textiles v. State Bank",
            "case_type": "Commercial Suit",
            "district": "Ludhiana",
            "status": "on-hold",
            "stage": "pleadings",
            "circulation_status": "non-circulated",
            "next_date": "2026-11-03",
            "interim_relief": "none"
        },
        {
            "id": "c4",
            "client_name": "Farah Khan",
            "file_no": "",
            "parties_name": "State v. Khan",
            "case_type": "Criminal Appeal",
            "status": "closed",
            "stage": "disposed"
        }
    ]))
    .unwrap()
}

pub fn seed_counsel() -> Vec<Counsel> {
    vec![
        Counsel {
            id: "n1".to_string(),
            name: "Adv. Kavita Rao".to_string(),
            email: "kavita.rao@chambers.in".to_string(),
            phone: Some("+91 98200 11111".to_string()),
            chamber: Some("Mehta Chambers".to_string()),
        },
        Counsel {
            id: "n2".to_string(),
            name: "Adv. Imran Sheikh".to_string(),
            email: "imran@sheikhlaw.in".to_string(),
            phone: None,
            chamber: None,
        },
    ]
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "a1".to_string(),
            client: "Rajesh Mehta".to_string(),
            details: "Discuss rejoinder draft".to_string(),
            date: Some("2026-10-20".to_string()),
            time: Some("11:00".to_string()),
            location: Some("Chamber 4".to_string()),
        },
        Appointment {
            id: "a2".to_string(),
            client: "New walk-in".to_string(),
            details: "Property dispute consultation".to_string(),
            date: Some("2026-10-19".to_string()),
            time: None,
            location: None,
        },
    ]
}

pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            title: "File rejoinder".to_string(),
            description: Some("Mehta writ, annexures P-1 to P-9".to_string()),
            assigned_to: Some("u1".to_string()),
            assigned_to_name: Some("Priya".to_string()),
            status: "pending".to_string(),
            deadline: Some("2026-10-22".to_string()),
            case_id: Some("c1".to_string()),
        },
        Task {
            id: "t2".to_string(),
            title: "Collect certified copies".to_string(),
            description: None,
            assigned_to: Some("u2".to_string()),
            assigned_to_name: Some("Rohit".to_string()),
            status: "completed".to_string(),
            deadline: Some("2026-10-05".to_string()),
            case_id: Some("c2".to_string()),
        },
        Task {
            id: "t3".to_string(),
            title: "Brief junior on Arora matter".to_string(),
            description: None,
            assigned_to: Some("u1".to_string()),
            assigned_to_name: Some("Priya".to_string()),
            status: "pending".to_string(),
            deadline: Some("2026-10-15".to_string()),
            case_id: Some("c3".to_string()),
        },
    ]
}

pub fn seed_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "e1".to_string(),
            description: "Court fee stamps".to_string(),
            amount: 1500.0,
            category: Some("filing".to_string()),
            date: Some("2026-10-03".to_string()),
        },
        Expense {
            id: "e2".to_string(),
            description: "Photocopies".to_string(),
            amount: 240.5,
            category: Some("office".to_string()),
            date: Some("2026-09-28".to_string()),
        },
    ]
}

pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "b1".to_string(),
            name: "Code of Civil Procedure".to_string(),
            author: Some("Mulla".to_string()),
            shelf: Some("R1".to_string()),
        },
        Book {
            id: "b2".to_string(),
            name: "Law of Evidence".to_string(),
            author: Some("Ratanlal".to_string()),
            shelf: Some("R2".to_string()),
        },
    ]
}

pub fn seed_storage_items() -> Vec<StorageItem> {
    vec![
        StorageItem {
            id: "s1".to_string(),
            case_id: Some("c1".to_string()),
            compartment: "A".to_string(),
            location: Some("Cabinet 1".to_string()),
        },
        StorageItem {
            id: "s2".to_string(),
            case_id: Some("deleted-case".to_string()),
            compartment: "B".to_string(),
            location: None,
        },
    ]
}

pub fn seed_sofa_items() -> Vec<SofaItem> {
    vec![SofaItem {
        id: "f1".to_string(),
        case_id: Some("c3".to_string()),
        compartment: "3".to_string(),
    }]
}
