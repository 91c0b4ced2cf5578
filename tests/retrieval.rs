// tests/retrieval.rs
//! Retrieval operations against an in-memory workspace.

mod common;

use common::{comment, id, row, FakeWorkspace};
use notionkit::{
    append_text, create_database_page, retrieve_block_children, retrieve_block_children_recursive,
    retrieve_comments, retrieve_comments_recursive, retrieve_database_pages,
    retrieve_general_info, rich_text_property, AppError, CachedNotionClient, ListOptions,
    NotionId, NotionRepository,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn ids<T, F>(items: impl Iterator<Item = Result<T, AppError>>, id_of: F) -> Vec<NotionId>
where
    F: Fn(&T) -> NotionId,
{
    items.map(|item| id_of(&item.unwrap())).collect()
}

#[test]
fn recursive_children_come_back_breadth_first() {
    let workspace = FakeWorkspace::tree(3, 3, 2);
    let walked = ids(
        retrieve_block_children_recursive(&workspace, &id(0), None),
        |b| b.id.clone(),
    );

    assert_eq!(walked, (1..=39).map(id).collect::<Vec<_>>());
    // 13 parents, each listed in two pages of at most two
    assert_eq!(workspace.calls_to("children"), 26);
}

#[test]
fn recursive_limit_bounds_items_and_fetches() {
    let workspace = FakeWorkspace::tree(3, 3, 2);
    let walked = ids(
        retrieve_block_children_recursive(&workspace, &id(0), Some(4)),
        |b| b.id.clone(),
    );

    assert_eq!(walked, (1..=4).map(id).collect::<Vec<_>>());
    // root: [1,2] [3]; block 1: [4,5]
    assert_eq!(workspace.calls_to("children"), 3);
}

#[test]
fn recursive_zero_limit_fetches_nothing() {
    let workspace = FakeWorkspace::tree(2, 2, 2);
    let walked: Vec<_> = retrieve_block_children_recursive(&workspace, &id(0), Some(0)).collect();
    assert!(walked.is_empty());
    assert_eq!(workspace.calls_to("children"), 0);
}

#[test]
fn failed_subtree_surfaces_after_earlier_results() {
    let mut workspace = FakeWorkspace::tree(2, 2, 10);
    workspace.broken.push(id(1));

    let results: Vec<_> = retrieve_block_children_recursive(&workspace, &id(0), None).collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().id, id(1));
    assert_eq!(results[1].as_ref().unwrap().id, id(2));
    let err = results[2].as_ref().unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(err.notion_code().unwrap().is_not_found());
}

#[test]
fn single_page_listing_fetches_once() {
    let workspace = FakeWorkspace::tree(1, 5, 2);
    let options = ListOptions::single_page(3).unwrap();
    let listed = ids(retrieve_block_children(&workspace, &id(0), options), |b| {
        b.id.clone()
    });

    assert_eq!(listed, (1..=3).map(id).collect::<Vec<_>>());
    assert_eq!(workspace.calls_to("children"), 1);
    assert_eq!(workspace.list_calls.borrow()[0].2.page_size, Some(3));
}

#[test]
fn database_rows_follow_cursors() {
    let mut workspace = FakeWorkspace::new(2);
    let database = id(500);
    workspace.rows.insert(
        database.clone(),
        (1..=5).map(|n| row(&id(600 + n), &format!("Row {}", n))).collect(),
    );

    let titles: Vec<String> = retrieve_database_pages(&workspace, &database, ListOptions::all())
        .map(|page| page.unwrap().title())
        .collect();

    assert_eq!(titles, vec!["Row 1", "Row 2", "Row 3", "Row 4", "Row 5"]);
    assert_eq!(workspace.calls_to("query"), 3);
    let cursors: Vec<Option<String>> = workspace
        .list_calls
        .borrow()
        .iter()
        .map(|(_, _, request)| request.start_cursor.clone())
        .collect();
    assert_eq!(cursors, vec![None, Some("2".to_string()), Some("4".to_string())]);
}

#[test]
fn iteration_is_lazy() {
    let mut workspace = FakeWorkspace::new(2);
    let database = id(500);
    workspace.rows.insert(
        database.clone(),
        (1..=6).map(|n| row(&id(600 + n), "row")).collect(),
    );

    let mut rows = retrieve_database_pages(&workspace, &database, ListOptions::all());
    assert_eq!(workspace.calls_to("query"), 0);
    rows.next().unwrap().unwrap();
    assert_eq!(workspace.calls_to("query"), 1);
    drop(rows);
    assert_eq!(workspace.calls_to("query"), 1);
}

#[test]
fn comments_of_root_come_before_descendants() {
    let mut workspace = FakeWorkspace::tree(2, 2, 10);
    workspace
        .comments
        .insert(id(0), vec![comment(&id(100), &id(0), "on root")]);
    workspace
        .comments
        .insert(id(2), vec![comment(&id(102), &id(2), "on two")]);
    workspace.comments.insert(
        id(3),
        vec![
            comment(&id(103), &id(3), "on three"),
            comment(&id(104), &id(3), "again"),
        ],
    );

    let found = ids(
        retrieve_comments_recursive(&workspace, &id(0), None, ListOptions::all()),
        |c| c.id.clone(),
    );
    assert_eq!(found, vec![id(100), id(102), id(103), id(104)]);

    let direct = ids(
        retrieve_comments(&workspace, &id(3), ListOptions::all()),
        |c| c.id.clone(),
    );
    assert_eq!(direct, vec![id(103), id(104)]);
}

#[test]
fn comment_walk_honours_its_limit() {
    let mut workspace = FakeWorkspace::tree(2, 2, 10);
    for n in 1..=6 {
        workspace
            .comments
            .insert(id(n), vec![comment(&id(100 + n), &id(n), "note")]);
    }

    let found = ids(
        retrieve_comments_recursive(&workspace, &id(0), Some(2), ListOptions::all()),
        |c| c.id.clone(),
    );
    assert_eq!(found, vec![id(101), id(102)]);
}

#[test]
fn comment_walk_stops_at_first_failure() {
    let mut workspace = FakeWorkspace::tree(2, 2, 10);
    workspace.broken.push(id(1));
    workspace
        .comments
        .insert(id(2), vec![comment(&id(102), &id(2), "note")]);
    workspace
        .comments
        .insert(id(5), vec![comment(&id(105), &id(5), "unreachable")]);

    let results: Vec<_> =
        retrieve_comments_recursive(&workspace, &id(0), None, ListOptions::all()).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().id, id(102));
    assert!(results[1].is_err());
}

#[test]
fn append_text_writes_one_chunked_paragraph() {
    let workspace = FakeWorkspace::new(10);
    let text = "a".repeat(4500);
    let created = append_text(&workspace, &id(7), &text).unwrap();
    assert_eq!(created.len(), 1);

    let appended = workspace.appended.borrow();
    let (parent, children) = &appended[0];
    assert_eq!(parent, &id(7));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["type"], "paragraph");
    let spans = children[0]["paragraph"]["rich_text"].as_array().unwrap();
    let lengths: Vec<usize> = spans
        .iter()
        .map(|span| span["text"]["content"].as_str().unwrap().len())
        .collect();
    assert_eq!(lengths, vec![2000, 2000, 500]);
}

#[test]
fn create_database_page_sends_properties() {
    let workspace = FakeWorkspace::new(10);
    let properties = serde_json::json!({ "Summary": rich_text_property("short note") });
    let page = create_database_page(&workspace, &id(500), properties).unwrap();
    assert_eq!(page.title(), "created");

    let created = workspace.created.borrow();
    assert_eq!(created[0].0, id(500));
    assert_eq!(
        created[0].1["Summary"]["rich_text"][0]["text"]["content"],
        "short note"
    );
}

#[test]
fn cached_client_memoizes_general_info_only() {
    let workspace = FakeWorkspace::tree(1, 2, 10);
    let cached = CachedNotionClient::new(workspace, Duration::from_secs(60));

    for _ in 0..3 {
        let block = retrieve_general_info(&cached, &id(1)).unwrap();
        assert_eq!(block.block_type(), "paragraph");
    }
    assert_eq!(cached.inner().lookups.get(), 1);

    for _ in 0..2 {
        let listed: Vec<_> =
            retrieve_block_children(&cached, &id(0), ListOptions::all()).collect();
        assert_eq!(listed.len(), 2);
    }
    assert_eq!(cached.inner().calls_to("children"), 2);
}

#[test]
fn works_through_a_trait_object() {
    let workspace: Box<dyn NotionRepository> = Box::new(FakeWorkspace::tree(2, 2, 1));
    let count = retrieve_block_children_recursive(workspace.as_ref(), &id(0), None).count();
    assert_eq!(count, 6);
}
