use super::*;

fn task(completed: bool) -> Task {
    Task { id: None, text: "t".to_owned(), completed }
}

#[test]
fn default_filter_is_all() {
    assert_eq!(Filter::default(), Filter::All);
}

#[test]
fn all_matches_everything() {
    assert!(Filter::All.matches(&task(true)));
    assert!(Filter::All.matches(&task(false)));
}

#[test]
fn completed_and_pending_are_complementary() {
    for completed in [true, false] {
        let t = task(completed);
        assert_ne!(Filter::Completed.matches(&t), Filter::Pending.matches(&t));
        assert_eq!(Filter::Completed.matches(&t), completed);
    }
}

#[test]
fn as_str_names_are_distinct_lowercase() {
    let names: Vec<&str> = Filter::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, ["all", "completed", "pending"]);
}

#[test]
fn labels_are_capitalized() {
    assert_eq!(Filter::All.label(), "All");
    assert_eq!(Filter::Completed.label(), "Completed");
    assert_eq!(Filter::Pending.label(), "Pending");
}
