//! Integration tests for the two-phase cleanup: survey what lives under
//! the configured team areas, then delete children before parents.

mod common;

use boardseed::cleanup::{CleanupEngine, CleanupReport};
use boardseed::models::TeamConfig;

use common::FakeStore;

// ============================================================================
// Test Helpers
// ============================================================================

fn team(name: &str, area_path: &str) -> TeamConfig {
    TeamConfig {
        name: name.to_string(),
        area_path: area_path.to_string(),
        iteration_path: String::new(),
    }
}

fn frontend() -> TeamConfig {
    team("Frontend", "Demo\\Frontend")
}

fn backend() -> TeamConfig {
    team("Backend", "Demo\\Backend")
}

// ============================================================================
// Survey
// ============================================================================

mod survey {
    use super::*;

    #[tokio::test]
    async fn finds_nothing_in_an_empty_project() {
        let store = FakeStore::new();
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");

        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[tokio::test]
    async fn only_picks_up_items_under_the_team_areas() {
        let store = FakeStore::new();
        store.insert_item("Task", "In scope", "Demo\\Frontend");
        store.insert_item("Task", "Also in scope", "Demo\\Backend");
        store.insert_item("Task", "Untouched", "Demo\\Payments");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine
            .survey(&[frontend(), backend()])
            .await
            .expect("survey succeeds");

        assert_eq!(plan.len(), 2);
        assert!(plan.items().iter().all(|i| i.title != "Untouched"));
    }

    #[tokio::test]
    async fn includes_child_areas_but_not_lookalike_names() {
        let store = FakeStore::new();
        store.insert_item("Task", "Nested", "Demo\\Frontend\\Web");
        store.insert_item("Task", "Lookalike", "Demo\\FrontendOps");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.items()[0].title, "Nested");
    }

    #[tokio::test]
    async fn counts_items_per_type() {
        let store = FakeStore::new();
        store.insert_item("Epic", "Platform", "Demo\\Frontend");
        store.insert_item("Task", "Wire up", "Demo\\Frontend");
        store.insert_item("Task", "Style", "Demo\\Frontend");
        store.insert_item("Product Backlog Item", "Cards", "Demo\\Frontend");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        let counts = plan.counts_by_type();

        assert_eq!(counts.get("Epic"), Some(&1));
        assert_eq!(counts.get("Task"), Some(&2));
        assert_eq!(counts.get("Product Backlog Item"), Some(&1));
    }

    #[tokio::test]
    async fn loads_details_in_batches_of_two_hundred() {
        let store = FakeStore::new();
        for i in 0..450 {
            store.insert_item("Task", &format!("Task {i}"), "Demo\\Frontend");
        }
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");

        assert_eq!(plan.len(), 450);
        assert_eq!(store.batch_sizes(), vec![200, 200, 50]);
    }

    #[tokio::test]
    async fn a_survey_alone_deletes_nothing() {
        let store = FakeStore::new();
        store.insert_item("Epic", "Platform", "Demo\\Frontend");
        store.insert_item("Task", "Wire up", "Demo\\Frontend");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");

        assert_eq!(plan.len(), 2);
        assert!(store.deletion_order().is_empty());
        assert_eq!(
            store.live_count(),
            2,
            "declining the confirmation ends the run after the survey"
        );
    }
}

// ============================================================================
// Execution
// ============================================================================

mod execute {
    use super::*;

    #[tokio::test]
    async fn deletes_children_before_parents() {
        let store = FakeStore::new();
        let epic = store.insert_item("Epic", "Platform", "Demo\\Frontend");
        let feature = store.insert_item("Feature", "Checkout", "Demo\\Frontend");
        let item = store.insert_item("Product Backlog Item", "Cards", "Demo\\Frontend");
        let task_a = store.insert_item("Task", "Wire up", "Demo\\Frontend");
        let task_b = store.insert_item("Task", "Style", "Demo\\Frontend");
        let late_epic = store.insert_item("Epic", "Mobile", "Demo\\Frontend");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        let report = engine.execute(&plan).await;

        assert_eq!(report, CleanupReport { deleted: 6, failed: 0 });
        assert_eq!(
            store.deletion_order(),
            vec![task_b.0, task_a.0, item.0, feature.0, late_epic.0, epic.0],
            "tasks, then backlog items, then features, then epics"
        );
    }

    #[tokio::test]
    async fn backlog_items_of_every_template_rank_alike() {
        let store = FakeStore::new();
        let epic = store.insert_item("Epic", "Platform", "Demo\\Frontend");
        let story = store.insert_item("User Story", "Browse", "Demo\\Frontend");
        let issue = store.insert_item("Issue", "Slow search", "Demo\\Frontend");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        engine.execute(&plan).await;

        assert_eq!(
            store.deletion_order(),
            vec![issue.0, story.0, epic.0],
            "stories and issues go before the epic"
        );
    }

    #[tokio::test]
    async fn deletes_into_the_recycle_bin() {
        let store = FakeStore::new();
        store.insert_item("Task", "Wire up", "Demo\\Frontend");
        store.insert_item("Task", "Style", "Demo\\Frontend");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        let report = engine.execute(&plan).await;

        assert_eq!(report.deleted, 2);
        assert_eq!(store.live_count(), 0);
        assert_eq!(store.recycled_count(), 2, "items are recoverable, not destroyed");
    }

    #[tokio::test]
    async fn one_failed_delete_does_not_stop_the_rest() {
        let store = FakeStore::new();
        store.insert_item("Task", "Wire up", "Demo\\Frontend");
        let stuck = store.insert_item("Task", "Style", "Demo\\Frontend");
        store.insert_item("Task", "Review", "Demo\\Frontend");
        store.fail_delete_of(stuck);
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        let report = engine.execute(&plan).await;

        assert_eq!(report, CleanupReport { deleted: 2, failed: 1 });
        assert_eq!(store.recycled_count(), 2);
        let survivors = store.live_items();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].title, "Style");
    }

    #[tokio::test]
    async fn leaves_items_outside_the_areas_alone() {
        let store = FakeStore::new();
        store.insert_item("Task", "In scope", "Demo\\Frontend");
        store.insert_item("Task", "Untouched", "Demo\\Payments");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&[frontend()]).await.expect("survey succeeds");
        engine.execute(&plan).await;

        let survivors = store.live_items();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].title, "Untouched");
    }

    #[tokio::test]
    async fn a_generated_backlog_cleans_up_completely() {
        let store = FakeStore::new();
        let catalog =
            boardseed::content::TemplateCatalog::new(boardseed::content::ProcessTemplate::Scrum);
        let mut sync =
            boardseed::sync::HierarchySynchronizer::new(&store, &catalog, "Demo", false, Some(5));
        let teams = [frontend(), backend()];
        let generated = sync.generate(&teams).await.expect("generation succeeds");
        let engine = CleanupEngine::new(&store, "Demo");

        let plan = engine.survey(&teams).await.expect("survey succeeds");
        let report = engine.execute(&plan).await;

        assert_eq!(plan.len(), generated.created());
        assert_eq!(report.deleted, generated.created());
        assert_eq!(report.failed, 0);
        assert_eq!(store.live_count(), 0);
    }
}
