use super::*;

// =============================================================
// Role ranking and wire format
// =============================================================

#[test]
fn role_rank_is_viewer_editor_admin() {
    assert!(Role::Viewer < Role::Editor);
    assert!(Role::Editor < Role::Admin);
    assert!(Role::Admin >= Role::Admin);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"editor\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"admin\"").unwrap(),
        Role::Admin
    );
}

#[test]
fn role_parses_wire_names_and_rejects_unknown() {
    assert_eq!("viewer".parse::<Role>(), Ok(Role::Viewer));
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert!("superuser".parse::<Role>().is_err());
    assert!("Admin".parse::<Role>().is_err());
}

#[test]
fn role_edit_rights() {
    assert!(!Role::Viewer.can_edit());
    assert!(Role::Editor.can_edit());
    assert!(Role::Admin.can_edit());
}

// =============================================================
// Record shapes
// =============================================================

#[test]
fn user_deserializes_mongo_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u-42",
        "name": "Alice",
        "email": "alice@example.com",
        "role": "viewer"
    }))
    .unwrap();
    assert_eq!(user.id, "u-42");
    assert_eq!(user.role, Role::Viewer);
}

#[test]
fn hero_tolerates_missing_optional_blocks() {
    let hero: Hero = serde_json::from_value(serde_json::json!({
        "_id": "h-1",
        "name": "Nightrunner"
    }))
    .unwrap();
    assert_eq!(hero.id, "h-1");
    assert!(hero.image_url.is_empty());
    assert_eq!(hero.powerstats, Powerstats::default());
    assert_eq!(hero.biography, Biography::default());
}

#[test]
fn hero_decodes_camel_case_nested_blocks() {
    let hero: Hero = serde_json::from_value(serde_json::json!({
        "_id": "h-2",
        "name": "Atalanta",
        "imageUrl": "https://img.example/atalanta.jpg",
        "powerstats": { "strength": 80, "speed": 95 },
        "biography": { "fullName": "Atalanta of Arcadia", "publisher": "Myth", "alignment": "good" },
        "appearance": { "gender": "Female", "race": "Human" }
    }))
    .unwrap();
    assert_eq!(hero.image_url, "https://img.example/atalanta.jpg");
    assert_eq!(hero.powerstats.speed, 95);
    assert_eq!(hero.powerstats.combat, 0);
    assert_eq!(hero.biography.full_name, "Atalanta of Arcadia");
    assert_eq!(hero.appearance.race, "Human");
}

#[test]
fn hero_page_defaults_when_fields_missing() {
    let page: HeroPage = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn compare_result_tolerates_opaque_payloads() {
    let result: CompareResult =
        serde_json::from_value(serde_json::json!({ "winner": "teamA", "scoreA": 412 })).unwrap();
    assert_eq!(result.winner.as_deref(), Some("teamA"));
    assert!(result.explanation.is_none());
}

#[test]
fn user_page_decodes_pagination() {
    let page: UserPage = serde_json::from_value(serde_json::json!({
        "users": [{
            "_id": "u-1",
            "name": "Root",
            "email": "root@example.com",
            "role": "admin",
            "createdAt": "2024-01-01T00:00:00Z"
        }],
        "pagination": { "page": 2, "limit": 10, "total": 31, "pages": 4 }
    }))
    .unwrap();
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].role, Role::Admin);
    assert_eq!(page.pagination.pages, 4);
}
