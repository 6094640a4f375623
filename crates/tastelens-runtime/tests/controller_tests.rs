//! Behavioral tests for the view controllers: stale-response suppression,
//! idempotent re-key, error message policy, and the recommendation flow.

use std::sync::Arc;

use tastelens_client::error::{CONNECTIVITY_MESSAGE, NOT_FOUND_MESSAGE};
use tastelens_client::ApiError;
use tastelens_runtime::{DishDetailController, FeedController, RecommendationController};
use tastelens_testing::fixtures;
use tastelens_testing::{ScriptedDishSource, ScriptedFeedSource, ScriptedRecommendSource};
use tastelens_types::{FetchState, Recommendations};

#[tokio::test]
async fn stale_response_is_suppressed_across_key_change() {
    let source = Arc::new(ScriptedDishSource::new());
    let k1_gate = source.push_gated_ok(fixtures::dish("Rajma Chawal"));
    let k2_gate = source.push_gated_ok(fixtures::dish("Masala Dosa"));

    let controller = DishDetailController::new(source.clone());

    let k1_task = controller.set_dish("Rajma Chawal").expect("first fetch issues");
    let k2_task = controller
        .set_dish("Masala Dosa")
        .expect("key change issues a new fetch");

    // The newer request resolves first...
    k2_gate.send(()).unwrap();
    k2_task.await.unwrap();

    // ...and the superseded one resolves late.
    k1_gate.send(()).unwrap();
    k1_task.await.unwrap();

    // The final state reflects K2's outcome, never K1's.
    match controller.state() {
        FetchState::Success(dish) => assert_eq!(dish.name, "Masala Dosa"),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(source.issued(), 2);
}

#[tokio::test]
async fn stale_failure_cannot_clobber_newer_success() {
    let source = Arc::new(ScriptedDishSource::new());
    let k1_gate = source.push_gated_err(ApiError::Connectivity("refused".to_string()));
    let k2_gate = source.push_gated_ok(fixtures::dish("Masala Dosa"));

    let controller = DishDetailController::new(source.clone());
    let k1_task = controller.set_dish("Rajma Chawal").unwrap();
    let k2_task = controller.set_dish("Masala Dosa").unwrap();

    k2_gate.send(()).unwrap();
    k2_task.await.unwrap();
    k1_gate.send(()).unwrap();
    k1_task.await.unwrap();

    assert!(matches!(controller.state(), FetchState::Success(_)));
}

#[tokio::test]
async fn same_key_does_not_issue_a_second_request() {
    let source = Arc::new(ScriptedDishSource::new());
    let gate = source.push_gated_ok(fixtures::dish("Paneer Tikka"));

    let controller = DishDetailController::new(source.clone());
    let task = controller.set_dish("Paneer Tikka").unwrap();

    // Same id while the first request is still loading: no new request.
    assert!(controller.set_dish("Paneer Tikka").is_none());
    assert_eq!(source.issued(), 1);

    gate.send(()).unwrap();
    task.await.unwrap();

    // Same id after success: still a no-op.
    assert!(controller.set_dish("Paneer Tikka").is_none());
    assert_eq!(source.issued(), 1);
}

#[tokio::test]
async fn not_found_and_connectivity_messages_are_distinct() {
    let source = Arc::new(ScriptedDishSource::new());
    source.push_err(ApiError::NotFound);
    source.push_err(ApiError::Connectivity("connection refused".to_string()));

    let controller = DishDetailController::new(source.clone());

    controller.set_dish("No Such Dish").unwrap().await.unwrap();
    let not_found_message = match controller.state() {
        FetchState::Error(message) => message,
        other => panic!("expected error, got {:?}", other),
    };
    assert_eq!(not_found_message, NOT_FOUND_MESSAGE);

    controller.set_dish("Another Dish").unwrap().await.unwrap();
    let connectivity_message = match controller.state() {
        FetchState::Error(message) => message,
        other => panic!("expected error, got {:?}", other),
    };
    assert_eq!(connectivity_message, CONNECTIVITY_MESSAGE);

    assert_ne!(not_found_message, connectivity_message);
}

#[tokio::test]
async fn retry_rearms_after_error_without_a_key_change() {
    let source = Arc::new(ScriptedDishSource::new());
    source.push_err(ApiError::Connectivity("refused".to_string()));
    source.push_ok(fixtures::dish("Rajma Chawal"));

    let controller = DishDetailController::new(source.clone());
    controller.set_dish("Rajma Chawal").unwrap().await.unwrap();
    assert!(matches!(controller.state(), FetchState::Error(_)));

    // Same key is a no-op after an error; retry is the explicit re-arm.
    assert!(controller.set_dish("Rajma Chawal").is_none());
    controller.retry().unwrap().await.unwrap();

    match controller.state() {
        FetchState::Success(dish) => assert_eq!(dish.name, "Rajma Chawal"),
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn feed_activation_is_single_flight() {
    let source = Arc::new(ScriptedFeedSource::new());
    let gate = source.push_gated_ok(fixtures::dishes(&["Dosa", "Biryani", "Samosa"]));

    let controller = FeedController::new(source.clone());
    let task = controller.activate().unwrap();
    assert!(controller.activate().is_none());
    assert_eq!(source.issued(), 1);

    gate.send(()).unwrap();
    task.await.unwrap();

    match controller.state() {
        FetchState::Success(dishes) => assert_eq!(dishes.len(), 3),
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn feed_failures_collapse_to_the_generic_connectivity_message() {
    let source = Arc::new(ScriptedFeedSource::new());
    source.push_err(ApiError::Malformed("truncated body".to_string()));

    let controller = FeedController::new(source);
    controller.activate().unwrap().await.unwrap();

    assert_eq!(
        controller.state().error_message(),
        Some(CONNECTIVITY_MESSAGE)
    );
}

#[tokio::test]
async fn recommendation_flow_carries_both_lists() {
    let source = Arc::new(ScriptedRecommendSource::new());
    source.push_ok(Recommendations {
        recently_rated: fixtures::dishes(&["Dal Makhani", "Naan"]),
        recommended: fixtures::dishes(&["Shahi Paneer", "Malai Kofta", "Paneer Butter Masala"]),
    });

    let controller = RecommendationController::new(source);
    controller.request("Paneer Tikka").unwrap().await.unwrap();

    match controller.state() {
        FetchState::Success(recs) => {
            assert_eq!(recs.recently_rated.len(), 2);
            assert_eq!(recs.recommended.len(), 3);
            assert!(recs.recommended.iter().all(|d| !d.id.is_empty() && !d.name.is_empty()));
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn recommendation_domain_error_surfaces_verbatim() {
    let source = Arc::new(ScriptedRecommendSource::new());
    source.push_err(ApiError::Domain(
        "Dish 'Sushi' not found in dataset.".to_string(),
    ));

    let controller = RecommendationController::new(source);
    controller.request("Sushi").unwrap().await.unwrap();

    assert_eq!(
        controller.state().error_message(),
        Some("Dish 'Sushi' not found in dataset.")
    );
}

#[tokio::test]
async fn new_favorite_supersedes_an_inflight_request() {
    let source = Arc::new(ScriptedRecommendSource::new());
    let first_gate = source.push_gated_ok(Recommendations {
        recently_rated: fixtures::dishes(&["Dal Makhani"]),
        recommended: fixtures::dishes(&["Shahi Paneer"]),
    });
    let second_gate = source.push_gated_ok(Recommendations {
        recently_rated: vec![],
        recommended: fixtures::dishes(&["Gulab Jamun"]),
    });

    let controller = RecommendationController::new(source.clone());
    let first_task = controller.request("Paneer Tikka").unwrap();
    let second_task = controller.request("Rasmalai").unwrap();

    second_gate.send(()).unwrap();
    second_task.await.unwrap();
    first_gate.send(()).unwrap();
    first_task.await.unwrap();

    match controller.state() {
        FetchState::Success(recs) => {
            // Empty recently-rated is still success, not an error.
            assert!(recs.recently_rated.is_empty());
            assert_eq!(recs.recommended[0].name, "Gulab Jamun");
        }
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(source.issued(), 2);
}
