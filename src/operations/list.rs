//! Pure list operations over a [`TaskCollection`]
//!
//! Every function takes the collection by value and returns the new one.
//! Nothing here touches storage; persisting and re-rendering is the
//! caller's job (see [`super::tasks::TaskController`]).

use chrono::{Local, NaiveDate};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::model::{SortMode, Task, TaskCollection};

/// Date format shared by due dates and the "today" comparison
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append a new task.
///
/// Text that is empty after trimming is rejected silently (the collection is
/// returned unchanged). A due date is only attached when it is non-empty.
pub fn add(mut tasks: TaskCollection, text: &str, due_date: Option<&str>) -> TaskCollection {
    let text = text.trim();
    if text.is_empty() {
        return tasks;
    }

    let due_date = due_date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    tasks.push(Task::new(text, due_date));
    tasks
}

/// Remove every task whose text equals `text`.
pub fn remove(mut tasks: TaskCollection, text: &str) -> TaskCollection {
    tasks.retain(|task| task.text != text);
    tasks
}

/// Flip the completion flag of the first task whose text equals `text`.
pub fn toggle_completion(mut tasks: TaskCollection, text: &str) -> TaskCollection {
    if let Some(task) = tasks.iter_mut().find(|task| task.text == text) {
        task.completed = !task.completed;
    }
    tasks
}

/// Reorder tasks. Both orderings are stable.
pub fn sort(mut tasks: TaskCollection, mode: SortMode) -> TaskCollection {
    match mode {
        SortMode::Alphabetical => match text_collator() {
            Some(collator) => tasks.sort_by(|a, b| collator.compare(&a.text, &b.text)),
            None => tasks.sort_by(|a, b| a.text.cmp(&b.text)),
        },
        SortMode::Status => tasks.sort_by_key(|task| task.completed),
        SortMode::None => {}
    }
    tasks
}

/// Unicode root collation (CLDR defaults), the ordering `localeCompare`
/// uses for text without locale-specific tailoring.
///
/// Falls back to code point order when the collation data cannot be loaded.
fn text_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "collation data unavailable, sorting by code point");
            None
        }
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Whether a due date lies strictly before today's local date.
pub fn is_expired(due_date: Option<&str>) -> bool {
    is_expired_on(due_date, &today())
}

/// Whether `due_date` is strictly before `today`, both `YYYY-MM-DD`.
///
/// The comparison is lexicographic, which matches calendar order for
/// well-formed dates.
pub fn is_expired_on(due_date: Option<&str>, today: &str) -> bool {
    match due_date {
        Some(due) if !due.is_empty() => due < today,
        _ => false,
    }
}

/// Whether a due date string parses as a calendar date.
pub fn is_valid_date(due_date: &str) -> bool {
    NaiveDate::parse_from_str(due_date, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    fn done(text: &str) -> Task {
        Task {
            text: text.to_string(),
            completed: true,
            due_date: None,
        }
    }

    #[test]
    fn test_add_to_empty() {
        let tasks = add(Vec::new(), "Buy milk", None);
        assert_eq!(tasks, vec![Task::new("Buy milk", None)]);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].due_date, None);
    }

    #[test]
    fn test_add_trims_text() {
        let tasks = add(Vec::new(), "  Buy milk \n", None);
        assert_eq!(tasks[0].text, "Buy milk");
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let before = vec![Task::new("Existing", None)];
        let after = add(before.clone(), "   \t", Some("2030-01-01"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_add_due_date_only_when_non_empty() {
        let tasks = add(Vec::new(), "A", Some(""));
        assert_eq!(tasks[0].due_date, None);

        let tasks = add(tasks, "B", Some("2030-06-01"));
        assert_eq!(tasks[1].due_date.as_deref(), Some("2030-06-01"));
    }

    #[test]
    fn test_add_allows_duplicates() {
        let tasks = add(add(Vec::new(), "X", None), "X", None);
        assert_eq!(texts(&tasks), vec!["X", "X"]);
    }

    #[test]
    fn test_remove_all_matches() {
        let tasks = vec![
            Task::new("X", None),
            Task::new("Y", None),
            done("X"),
        ];
        let tasks = remove(tasks, "X");
        assert_eq!(texts(&tasks), vec!["Y"]);
    }

    #[test]
    fn test_remove_no_match() {
        let tasks = vec![Task::new("Y", None)];
        assert_eq!(remove(tasks.clone(), "X"), tasks);
    }

    #[test]
    fn test_toggle_first_match_only() {
        let tasks = vec![Task::new("X", None), Task::new("X", None)];
        let tasks = toggle_completion(tasks, "X");
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let original = vec![Task::new("A", None), done("B")];
        let twice = toggle_completion(toggle_completion(original.clone(), "B"), "B");
        assert_eq!(twice, original);
    }

    #[test]
    fn test_toggle_no_match() {
        let tasks = vec![Task::new("A", None)];
        assert_eq!(toggle_completion(tasks.clone(), "Z"), tasks);
    }

    #[test]
    fn test_sort_alphabetical() {
        let tasks = vec![
            Task::new("banana", None),
            Task::new("Apple", None),
            Task::new("cherry", None),
            Task::new("apple", None),
        ];
        let sorted = sort(tasks, SortMode::Alphabetical);
        assert_eq!(texts(&sorted), vec!["apple", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_alphabetical_idempotent() {
        let tasks = vec![
            Task::new("pear", None),
            Task::new("Fig", None),
            Task::new("fig", None),
            Task::new("kiwi", None),
        ];
        let once = sort(tasks, SortMode::Alphabetical);
        let twice = sort(once.clone(), SortMode::Alphabetical);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_status_is_stable() {
        let tasks = vec![
            done("d1"),
            Task::new("o1", None),
            done("d2"),
            Task::new("o2", None),
        ];
        let sorted = sort(tasks, SortMode::Status);
        assert_eq!(texts(&sorted), vec!["o1", "o2", "d1", "d2"]);
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let tasks = vec![Task::new("b", None), Task::new("a", None)];
        assert_eq!(sort(tasks.clone(), SortMode::None), tasks);
    }

    #[test]
    fn test_sort_alphabetical_accents_and_punctuation() {
        let tasks = vec![
            Task::new("zebra", None),
            Task::new("éclair", None),
            Task::new("eagle", None),
            Task::new("_draft", None),
            Task::new("{x}", None),
        ];
        let sorted = sort(tasks, SortMode::Alphabetical);
        // accented letters sit next to their base letter; punctuation sorts first
        assert_eq!(
            texts(&sorted),
            vec!["_draft", "{x}", "eagle", "éclair", "zebra"]
        );
    }

    #[test]
    fn test_text_collator_orders_case_and_prefixes() {
        use std::cmp::Ordering;

        let collator = text_collator().unwrap();
        assert_eq!(collator.compare("a", "B"), Ordering::Less);
        assert_eq!(collator.compare("a", "A"), Ordering::Less);
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
        assert_eq!(collator.compare("ab", "abc"), Ordering::Less);
        assert_eq!(collator.compare("Ørsted", "Zoo"), Ordering::Less);
    }

    #[test]
    fn test_is_expired() {
        assert!(is_expired(Some("2000-01-01")));
        assert!(!is_expired(None));
        assert!(!is_expired(Some("9999-12-31")));
    }

    #[test]
    fn test_is_expired_on_day_granularity() {
        assert!(is_expired_on(Some("2024-03-09"), "2024-03-10"));
        assert!(!is_expired_on(Some("2024-03-10"), "2024-03-10"));
        assert!(!is_expired_on(Some("2024-03-11"), "2024-03-10"));
        assert!(!is_expired_on(Some(""), "2024-03-10"));
    }

    #[test]
    fn test_today_format() {
        assert!(is_valid_date(&today()));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("tomorrow"));
    }
}
