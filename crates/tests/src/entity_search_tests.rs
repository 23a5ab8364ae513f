use engine::search;
use pretty_assertions::assert_eq;

use crate::common::{
    ids, seed_appointments, seed_books, seed_counsel, seed_expenses, seed_tasks,
};

#[test]
fn counsel_by_name_and_email() {
    let counsel = seed_counsel();
    assert_eq!(ids(&search(&counsel, "kavita")), vec!["n1"]);
    assert_eq!(ids(&search(&counsel, "SHEIKHLAW.IN")), vec!["n2"]);
    assert_eq!(ids(&search(&counsel, "adv.")), vec!["n1", "n2"]);
}

#[test]
fn counsel_chamber_and_phone_are_not_searchable() {
    let counsel = seed_counsel();
    assert!(search(&counsel, "Mehta Chambers").is_empty());
    assert!(search(&counsel, "98200").is_empty());
}

#[test]
fn appointment_by_client_and_details() {
    let appointments = seed_appointments();
    assert_eq!(ids(&search(&appointments, "mehta")), vec!["a1"]);
    assert_eq!(ids(&search(&appointments, "CONSULTATION")), vec!["a2"]);
    assert!(search(&appointments, "Chamber 4").is_empty());
}

#[test]
fn task_by_title_description_and_assignee_name() {
    let tasks = seed_tasks();
    assert_eq!(ids(&search(&tasks, "rejoinder")), vec!["t1"]);
    assert_eq!(ids(&search(&tasks, "annexures")), vec!["t1"]);
    assert_eq!(ids(&search(&tasks, "priya")), vec!["t1", "t3"]);
}

#[test]
fn task_assignee_id_is_not_searchable() {
    let tasks = seed_tasks();
    assert!(search(&tasks, "u2").is_empty());
}

#[test]
fn expense_by_description_only() {
    let expenses = seed_expenses();
    assert_eq!(ids(&search(&expenses, "stamps")), vec!["e1"]);
    assert!(search(&expenses, "office").is_empty());
}

#[test]
fn book_by_name_only() {
    let books = seed_books();
    assert_eq!(ids(&search(&books, "evidence")), vec!["b2"]);
    assert!(search(&books, "mulla").is_empty());
}
