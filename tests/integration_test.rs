//! End-to-end tests: generate snapshots over a scripted page driver and
//! replay actions against the refs they hand out.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use pagelens::{
    ActionRequest, DispatchError, PageDriver, PageError, RawDocument, RawElement,
    SnapshotController, SnapshotOptions, Viewport,
};

/// Driver over a fixed serialized document; records every page operation.
struct ScriptedDriver {
    doc: RawDocument,
    calls: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    fn new(doc: RawDocument) -> Self {
        Self {
            doc,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PageDriver for ScriptedDriver {
    async fn capture(&self) -> Result<RawDocument, PageError> {
        Ok(self.doc.clone())
    }

    async fn click(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("click {}", selector));
        Ok(())
    }

    async fn dblclick(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("dblclick {}", selector));
        Ok(())
    }

    async fn hover(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("hover {}", selector));
        Ok(())
    }

    async fn focus(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("focus {}", selector));
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("fill {} = {}", selector, value));
        Ok(())
    }

    async fn type_text(&self, selector: &str, value: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("type {} = {}", selector, value));
        Ok(())
    }

    async fn check(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("check {}", selector));
        Ok(())
    }

    async fn uncheck(&self, selector: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("uncheck {}", selector));
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<(), PageError> {
        self.calls.lock().push(format!("select {} = {}", selector, value));
        Ok(())
    }
}

fn el(tag: &str) -> RawElement {
    RawElement::new(tag).with_bbox(0.0, 0.0, 200.0, 24.0)
}

/// A signup page: header with nav links, a form with labeled fields, and a
/// footer that only contains boilerplate.
fn signup_page() -> RawDocument {
    RawDocument {
        url: "https://example.com/signup".to_string(),
        title: "Sign up".to_string(),
        viewport: Viewport::default(),
        body: el("body")
            .with_child(
                el("header").with_child(
                    el("nav")
                        .with_child(el("a").with_attr("href", "/").with_text("Home"))
                        .with_child(el("a").with_attr("href", "/pricing").with_text("Pricing")),
                ),
            )
            .with_child(
                el("form")
                    .with_attr("id", "signup")
                    .with_child(
                        el("label")
                            .with_attr("for", "email")
                            .with_text("Email address"),
                    )
                    .with_child(
                        el("input")
                            .with_attr("id", "email")
                            .with_attr("type", "email"),
                    )
                    .with_child(
                        el("select")
                            .with_attr("id", "plan")
                            .with_child(el("option").with_text("Free"))
                            .with_child(el("option").with_text("Pro")),
                    )
                    .with_child(
                        el("input")
                            .with_attr("id", "tos")
                            .with_attr("type", "checkbox"),
                    )
                    .with_child(el("button").with_text("Create account")),
            )
            .with_child(el("footer").with_child(el("p").with_text("© Example Inc."))),
    }
}

fn setup() -> (Arc<ScriptedDriver>, SnapshotController) {
    let driver = Arc::new(ScriptedDriver::new(signup_page()));
    let controller = SnapshotController::new(driver.clone());
    (driver, controller)
}

#[tokio::test]
async fn full_snapshot_then_replay_a_form_flow() {
    let (driver, controller) = setup();
    let snapshot = controller
        .generate(&SnapshotOptions::default().interactive(true))
        .await
        .unwrap();

    // Interactive-only: the two nav links, three form fields, and the
    // submit button; wrappers (and the plain options) are spliced away.
    assert_eq!(snapshot.refs.len(), 6);
    let email = snapshot
        .refs
        .values()
        .find(|n| n.name == "Email address")
        .expect("email input is named by its label");
    assert_eq!(email.role, "textbox");
    assert_eq!(email.selector, "#email");

    controller
        .dispatch(ActionRequest::new(&email.r#ref, "fill").with_value("a@b.co"))
        .await
        .unwrap();
    let tos = snapshot
        .refs
        .values()
        .find(|n| n.attributes.id.as_deref() == Some("tos"))
        .unwrap();
    controller
        .dispatch(ActionRequest::new(&tos.r#ref, "check"))
        .await
        .unwrap();
    let submit = snapshot
        .refs
        .values()
        .find(|n| n.name == "Create account")
        .unwrap();
    controller
        .dispatch(ActionRequest::new(format!("@{}", submit.r#ref), "click"))
        .await
        .unwrap();

    assert_eq!(
        driver.calls(),
        vec![
            "fill #email = a@b.co".to_string(),
            "check #tos".to_string(),
            format!("click {}", submit.selector),
        ]
    );
}

#[tokio::test]
async fn regeneration_restarts_numbering_and_invalidates_nothing_by_itself() {
    let (_, controller) = setup();
    let options = SnapshotOptions::default().interactive(true).compact(true);

    let first = controller.generate(&options).await.unwrap();
    let second = controller.generate(&options).await.unwrap();

    // Same document, same options: identical trees and identical numbering.
    assert_eq!(
        serde_json::to_value(&first.tree).unwrap(),
        serde_json::to_value(&second.tree).unwrap()
    );
    let mut first_keys: Vec<_> = first.refs.keys().collect();
    let mut second_keys: Vec<_> = second.refs.keys().collect();
    first_keys.sort();
    second_keys.sort();
    assert_eq!(first_keys, second_keys);

    // Refs from the first generation still dispatch: the slot was replaced
    // by an identical snapshot.
    controller
        .dispatch(ActionRequest::new(first.tree[0].r#ref.clone(), "hover"))
        .await
        .unwrap();
}

#[tokio::test]
async fn snapshot_invariants_hold_for_every_mode() {
    let (_, controller) = setup();
    let modes = [
        SnapshotOptions::default(),
        SnapshotOptions::default().interactive(true),
        SnapshotOptions::default().compact(true),
        SnapshotOptions::default().interactive(true).compact(true),
        SnapshotOptions::default().depth(1),
        SnapshotOptions::default().selector("#signup"),
    ];

    for options in modes {
        let snapshot = controller.generate(&options).await.unwrap();
        for (key, node) in &snapshot.refs {
            assert_eq!(key, &node.r#ref, "refs key matches node ref");
        }

        // Every node reachable from the tree is indexed, and nothing else.
        fn count(nodes: &[pagelens::SnapshotNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        assert_eq!(count(&snapshot.tree), snapshot.refs.len());
    }
}

#[tokio::test]
async fn clear_then_dispatch_reports_no_snapshot() {
    let (driver, controller) = setup();
    controller.generate(&SnapshotOptions::default()).await.unwrap();
    controller.clear();

    let err = controller
        .dispatch(ActionRequest::new("e1", "click"))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::NoSnapshot));
    assert!(driver.calls().is_empty());
}

#[tokio::test]
async fn text_outline_renders_roles_names_and_refs() {
    let (_, controller) = setup();
    let snapshot = controller
        .generate(&SnapshotOptions::default().interactive(true))
        .await
        .unwrap();

    let text = snapshot.to_text();
    assert!(text.contains("Page: Sign up"));
    assert!(text.contains("link \"Home\""));
    assert!(text.contains("button \"Create account\""));
}
