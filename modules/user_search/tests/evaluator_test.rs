//! Behaviour of the filter/sort/paginate pipeline over fixed datasets.

use query_core::SortDir;
use user_search::contract::model::{OrderField, QueryParameters, ResultUser, UserRecord};
use user_search::domain::evaluator::{evaluate, evaluate_page, fold_case};

fn user(id: i64, first: &str, last: &str, age: u32, about: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        age,
        about: about.to_string(),
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
    }
}

fn dataset() -> Vec<UserRecord> {
    vec![
        user(0, "Boyd", "Wolf", 22, "Nulla cillum enim voluptate consequat laborum esse."),
        user(1, "Hilda", "Mayer", 21, "Sit commodo consectetur minim amet ex. Boyd is a friend."),
        user(2, "Brooks", "Aguilar", 25, "Velit ullamco est aliqua voluptate nisi do."),
        user(3, "Everett", "Dillard", 27, "Sint eu id sint irure officia amet cillum."),
        user(4, "Owen", "Lynn", 30, "Elit anim elit eu et deserunt veniam laborum."),
        user(5, "Beulah", "Stark", 30, "Enim cillum eu cillum velit labore."),
        user(6, "Jennings", "Mays", 39, "Veniam consectetur non non aliquip exercitation."),
        user(7, "Leann", "Travis", 34, "Lorem magna dolore et velit ut officia."),
    ]
}

fn params(query: &str, field: OrderField, dir: SortDir, limit: usize, offset: usize) -> QueryParameters {
    QueryParameters::new(query, field, dir, limit, offset)
}

fn ids(users: &[ResultUser]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[test]
fn test_name_descending_orders_full_names() {
    let records = vec![
        user(1, "Boyd", "Wolf", 22, "Lorem"),
        user(2, "Anna", "Boyd", 30, "Ipsum"),
    ];
    let result = evaluate(&records, &params("Boyd", OrderField::Name, SortDir::Desc, 10, 0));

    assert_eq!(ids(&result), vec![1, 2]);
    assert_eq!(result[0].name, "Boyd Wolf");
    assert_eq!(result[1].name, "Anna Boyd");
    assert_eq!(result[0].age, 22);
    assert_eq!(result[1].about, "Ipsum");
}

#[test]
fn test_empty_term_returns_every_record() {
    let records = dataset();
    let result = evaluate(&records, &params("", OrderField::Id, SortDir::Asc, 100, 0));
    assert_eq!(ids(&result), (0..8).collect::<Vec<_>>());
}

#[test]
fn test_term_matches_name_or_about_case_insensitively() {
    let records = dataset();
    for term in ["boyd", "BOYD", "Boyd", "cillum", "LABORUM", "mays"] {
        let needle = term.to_lowercase();
        let result = evaluate(&records, &params(term, OrderField::Id, SortDir::Asc, 100, 0));
        assert!(!result.is_empty(), "term {term} should match something");

        for u in &result {
            assert!(
                u.name.to_lowercase().contains(&needle) || u.about.to_lowercase().contains(&needle),
                "user {} does not contain {term}",
                u.id
            );
        }

        let returned = ids(&result);
        for r in &records {
            let hit = r.display_name().to_lowercase().contains(&needle)
                || r.about.to_lowercase().contains(&needle);
            assert_eq!(returned.contains(&r.id), hit, "record {} term {term}", r.id);
        }
    }
}

#[test]
fn test_term_in_about_only() {
    let records = dataset();
    let result = evaluate(&records, &params("Boyd", OrderField::Id, SortDir::Asc, 10, 0));
    // 0 by name, 1 by biography
    assert_eq!(ids(&result), vec![0, 1]);
}

#[test]
fn test_no_match_is_empty() {
    let records = dataset();
    let result = evaluate(&records, &params("zzz-nothing", OrderField::Id, SortDir::Asc, 10, 0));
    assert!(result.is_empty());
}

#[test]
fn test_id_ascending_and_descending_are_reversed() {
    let records = dataset();
    let asc = ids(&evaluate(&records, &params("", OrderField::Id, SortDir::Asc, 100, 0)));
    let mut desc = ids(&evaluate(&records, &params("", OrderField::Id, SortDir::Desc, 100, 0)));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_sort_by_name() {
    let records = dataset();
    let result = evaluate(&records, &params("", OrderField::Name, SortDir::Asc, 100, 0));
    let names: Vec<&str> = result.iter().map(|u| u.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Beulah Stark");
}

#[test]
fn test_sort_by_age_is_stable_for_ties() {
    let records = dataset();
    // 4 and 5 are both 30; dataset order is 4 then 5
    let asc = ids(&evaluate(&records, &params("", OrderField::Age, SortDir::Asc, 100, 0)));
    assert_eq!(asc, vec![1, 0, 2, 3, 4, 5, 7, 6]);

    let desc = ids(&evaluate(&records, &params("", OrderField::Age, SortDir::Desc, 100, 0)));
    assert_eq!(desc, vec![6, 7, 4, 5, 3, 2, 0, 1]);
}

#[test]
fn test_name_ties_keep_dataset_order() {
    let records = vec![
        user(10, "Sam", "Lee", 40, ""),
        user(3, "Sam", "Lee", 20, ""),
        user(7, "Sam", "Lee", 30, ""),
    ];
    let asc = evaluate(&records, &params("", OrderField::Name, SortDir::Asc, 10, 0));
    assert_eq!(ids(&asc), vec![10, 3, 7]);
    let desc = evaluate(&records, &params("", OrderField::Name, SortDir::Desc, 10, 0));
    assert_eq!(ids(&desc), vec![10, 3, 7]);
}

#[test]
fn test_limit_one_offset_one_returns_second() {
    let records = dataset();
    let all = evaluate(&records, &params("cillum", OrderField::Id, SortDir::Asc, 100, 0));
    assert_eq!(ids(&all), vec![0, 3, 5]);

    let second = evaluate(&records, &params("cillum", OrderField::Id, SortDir::Asc, 1, 1));
    assert_eq!(ids(&second), vec![3]);
}

#[test]
fn test_offset_past_end_is_empty_not_error() {
    let records = dataset();
    let result = evaluate(&records, &params("cillum", OrderField::Id, SortDir::Asc, 10, 5));
    assert!(result.is_empty());

    let page = evaluate_page(&records, &params("cillum", OrderField::Id, SortDir::Asc, 10, 5));
    assert_eq!(page.page_info.total, 3);
    assert!(!page.page_info.has_next);
}

#[test]
fn test_result_size_matches_window_arithmetic() {
    let records = dataset();
    let total = records.len();
    for limit in 0..=10 {
        for offset in 0..=10 {
            let result = evaluate(&records, &params("", OrderField::Age, SortDir::Desc, limit, offset));
            let expected = if offset < total {
                limit.min(total - offset)
            } else {
                0
            };
            assert_eq!(result.len(), expected, "limit={limit} offset={offset}");
        }
    }
}

#[test]
fn test_windows_concatenate_to_full_order() {
    let records = dataset();
    let full = ids(&evaluate(&records, &params("", OrderField::Name, SortDir::Desc, 100, 0)));
    let mut stitched = Vec::new();
    let mut offset = 0;
    loop {
        let page = evaluate_page(&records, &params("", OrderField::Name, SortDir::Desc, 3, offset));
        stitched.extend(ids(&page.items));
        if !page.page_info.has_next {
            break;
        }
        offset += 3;
    }
    assert_eq!(stitched, full);
}

#[test]
fn test_huge_window_does_not_overflow() {
    let records = dataset();
    let result = evaluate(&records, &params("", OrderField::Id, SortDir::Asc, usize::MAX, 6));
    assert_eq!(ids(&result), vec![6, 7]);
    let none = evaluate(&records, &params("", OrderField::Id, SortDir::Asc, usize::MAX, usize::MAX));
    assert!(none.is_empty());
}

#[test]
fn test_evaluation_is_idempotent_and_pure() {
    let records = dataset();
    let snapshot = records.clone();
    let p = params("e", OrderField::Age, SortDir::Desc, 4, 1);
    let first = evaluate(&records, &p);
    let second = evaluate(&records, &p);
    assert_eq!(first, second);
    assert_eq!(records, snapshot);
}

#[test]
fn test_empty_dataset() {
    let result = evaluate(&[], &params("", OrderField::Name, SortDir::Asc, 10, 0));
    assert!(result.is_empty());
}

#[test]
fn test_projection_merges_names() {
    let records = vec![user(9, "Jo", "", 50, "about")];
    let result = evaluate(&records, &params("", OrderField::Id, SortDir::Asc, 1, 0));
    assert_eq!(
        result,
        vec![ResultUser {
            id: 9,
            name: "Jo".to_string(),
            age: 50,
            about: "about".to_string(),
            gender: "male".to_string(),
        }]
    );
}

#[test]
fn test_final_sigma_term_matches_inside_longer_word() {
    // "ΟΔΟΣ" ends in a final sigma on its own but not inside "ΟΔΟΣΤΕ"
    let records = vec![user(0, "Nikos", "Pappas", 40, "ΟΔΟΣΤΕ")];
    let result = evaluate(&records, &params("ΟΔΟΣ", OrderField::Id, SortDir::Asc, 10, 0));
    assert_eq!(ids(&result), vec![0]);

    let lower = evaluate(&records, &params("οδοσ", OrderField::Id, SortDir::Asc, 10, 0));
    assert_eq!(ids(&lower), vec![0]);
}

#[test]
fn test_fold_case_is_per_char() {
    assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
    assert_eq!(fold_case("ΟΔΟΣΤΕ"), "οδοστε");
    assert_eq!(fold_case("Boyd WOLF"), "boyd wolf");
    assert_eq!(fold_case(""), "");
}
