use insta::assert_snapshot;

use hookline::Platform;
use hookline::draft::{SourceItem, render};

fn reddit() -> SourceItem {
    SourceItem::from_json(
        r#"{
            "type": "reddit",
            "id": "r-7",
            "title": "Local models are catching up",
            "source_name": "r/LocalLLaMA",
            "snippet": "Open weights now match."
        }"#,
    )
    .unwrap()
}

fn newsletter() -> SourceItem {
    SourceItem::from_json(
        r#"{
            "type": "newsletter",
            "id": "n-7",
            "title": "Agents Everywhere",
            "source_name": "The Batch",
            "key_points": ["Agents ship", "Costs fall"]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_twitter_template() {
    assert_snapshot!(render(&reddit(), Platform::Twitter), @r"
    🧵 Local models are catching up

    Open weights now match.

    Here's why this matters:

    1. First insight derived from content
    2. Second critical point
    3. The actionable takeaway

    #rLocalLLaMA #Growth
    ");
}

#[test]
fn test_linkedin_template() {
    assert_snapshot!(render(&newsletter(), Platform::Linkedin), @r#"
    AGENTS EVERYWHERE

    I recently came across this insight from The Batch, and it completely changed my perspective.

    "Agents ship"

    In my experience, we often overlook this simple fact. Here are 3 ways to apply this today:

    ✅ Step 1
    ✅ Step 2
    ✅ Step 3

    What are your thoughts? 👇

    #Business #Strategy #Innovation
    "#);
}

#[test]
fn test_email_template() {
    assert_snapshot!(render(&newsletter(), Platform::Email), @r"
    Subject: Quick thought on Agents Everywhere

    Hey,

    I saw this piece on The Batch and thought of you.

    Key takeaway: Agents ship, Costs fall

    Worth a read when you have 5 minutes.

    Best,
    [Your Name]
    ");
}
