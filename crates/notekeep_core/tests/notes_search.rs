use notekeep_core::{NoteId, NoteRepository, SqliteNoteRepository};

fn ids(repo: &SqliteNoteRepository, keyword: &str) -> Vec<i64> {
    repo.search(keyword)
        .unwrap()
        .into_iter()
        .map(|note| note.id.get())
        .collect()
}

fn seeded() -> SqliteNoteRepository {
    let repo = SqliteNoteRepository::open_in_memory().unwrap();
    repo.add("Shopping", "milk, eggs").unwrap();
    repo.add("Todo", "write report").unwrap();
    repo.add("Reading list", "rust book").unwrap();
    repo
}

#[test]
fn search_matches_title_or_content_substring() {
    let repo = seeded();

    assert_eq!(ids(&repo, "egg"), vec![1]);
    assert_eq!(ids(&repo, "Todo"), vec![2]);
    assert_eq!(ids(&repo, "ead"), vec![3]);
    assert_eq!(ids(&repo, "r"), vec![2, 3]);
}

#[test]
fn search_returns_id_and_title_only() {
    let repo = seeded();

    let hits = repo.search("report").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, NoteId::new(2));
    assert_eq!(hits[0].title, "Todo");
}

#[test]
fn search_without_matches_returns_empty() {
    let repo = seeded();
    assert!(repo.search("zebra").unwrap().is_empty());
}

#[test]
fn empty_keyword_matches_every_note() {
    let repo = seeded();
    assert_eq!(ids(&repo, ""), vec![1, 2, 3]);
}

#[test]
fn search_on_empty_store_returns_empty() {
    let repo = SqliteNoteRepository::open_in_memory().unwrap();
    assert!(repo.search("").unwrap().is_empty());
}

#[test]
fn ascii_matching_ignores_case() {
    let repo = seeded();
    assert_eq!(ids(&repo, "SHOPPING"), vec![1]);
    assert_eq!(ids(&repo, "Milk"), vec![1]);
}

#[test]
fn wildcard_characters_match_literally() {
    let repo = SqliteNoteRepository::open_in_memory().unwrap();
    repo.add("discount", "50% off").unwrap();
    repo.add("discount", "500 off").unwrap();
    repo.add("code", "snake_case").unwrap();
    repo.add("code", "snakeXcase").unwrap();
    repo.add("path", r"C:\temp").unwrap();

    assert_eq!(ids(&repo, "50%"), vec![1]);
    assert_eq!(ids(&repo, "%"), vec![1]);
    assert_eq!(ids(&repo, "e_c"), vec![3]);
    assert_eq!(ids(&repo, r"C:\t"), vec![5]);
}

#[test]
fn deleted_notes_are_not_found() {
    let repo = seeded();
    repo.delete(NoteId::new(1)).unwrap();

    assert!(repo.search("egg").unwrap().is_empty());
    assert_eq!(ids(&repo, ""), vec![2, 3]);
}
