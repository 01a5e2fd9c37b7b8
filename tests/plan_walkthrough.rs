//! Walks a communication plan through every wizard step using only the
//! deterministic generators, as the service does without model credentials.

use story_studio::application::handlers::studio::{StudioGateway, StudioTask, TaskResult};
use story_studio::domain::plan::{CommunicationPlan, MessageSlot, WizardStep};
use story_studio::domain::studio::{
    explain_message, generate_key_messages, is_raising_awareness, validate_message_alignment,
    MORE_CONTENT_PROMPT,
};

const HEALTH_DOC: &str = "Community health workers in rural Kenya screen patients for diabetes \
    using a low cost test. Early diagnosis lets clinics start treatment months sooner and \
    reduces hospital admissions for complications across the district.";

async fn run(gateway: &StudioGateway, task: StudioTask) -> TaskResult {
    gateway.run(&task).await
}

#[tokio::test]
async fn offline_walkthrough_completes_every_step() {
    let gateway = StudioGateway::offline();
    let mut plan = CommunicationPlan::new();

    // Upload
    plan.documents = HEALTH_DOC.to_string();
    let summary = run(
        &gateway,
        StudioTask::SummariseDocument {
            documents: plan.documents.clone(),
        },
    )
    .await;
    plan.document_summary = summary.as_text().unwrap().to_string();
    assert_ne!(plan.document_summary, MORE_CONTENT_PROMPT);
    assert!(plan.is_step_complete(WizardStep::Upload));

    // Behaviour change
    let suggestions = run(
        &gateway,
        StudioTask::SuggestBehaviourChanges {
            documents: plan.documents.clone(),
        },
    )
    .await;
    let suggestions = suggestions.as_list().unwrap();
    assert_eq!(suggestions.len(), 5);
    assert!(suggestions.iter().all(|s| !is_raising_awareness(s)));
    plan.behaviour_change = suggestions[0].clone();
    assert!(plan.is_step_complete(WizardStep::BehaviourChange));

    // Should statement
    let statements = run(
        &gateway,
        StudioTask::GenerateShouldStatements {
            documents: plan.documents.clone(),
            behaviour_change: plan.behaviour_change.clone(),
        },
    )
    .await;
    plan.should_statements = statements.as_list().unwrap().to_vec();
    plan.selected_should_statement = plan.should_statements[0].clone();
    assert!(plan.is_step_complete(WizardStep::ShouldStatement));

    // Key messages
    let pip = run(
        &gateway,
        StudioTask::GeneratePipSuggestions {
            documents: plan.documents.clone(),
            should_statement: plan.effective_should_statement().to_string(),
        },
    )
    .await;
    let pip = pip.as_pip().unwrap().clone();
    for slot in MessageSlot::all() {
        let candidate = pip.for_slot(slot.index())[0].clone();
        assert!(validate_message_alignment(&candidate, plan.effective_should_statement()).aligned);
        assert!(!explain_message(&candidate, slot.index()).is_empty());
        plan.confirm_message(*slot, &candidate).unwrap();
    }
    assert!(plan.is_step_complete(WizardStep::KeyMessages));

    // Stories, statistics, soundbites
    for slot in MessageSlot::all() {
        let i = slot.index();
        plan.set_story(*slot, "Mary walked two hours to the clinic and was sent home untested.");
        let advice = run(
            &gateway,
            StudioTask::GenerateStoryAdvice {
                story: plan.message(*slot).story.clone(),
                message_index: i,
            },
        )
        .await;
        plan.message_mut(*slot).story_advice = advice.as_text().unwrap().to_string();
        assert!(plan.message(*slot).story_advice.contains(&format!("Message {}", i + 1)));

        plan.set_statistic(*slot, "1 in 3 adults");
        let options = run(
            &gateway,
            StudioTask::GenerateSoundbiteOptions {
                message: plan.message(*slot).text.clone(),
                message_index: i,
            },
        )
        .await;
        let first = options.as_list().unwrap()[0].clone();
        plan.set_soundbite(*slot, first);
    }

    assert_eq!(plan.first_incomplete_step(), None);
}

#[tokio::test]
async fn editing_a_story_discards_stale_advice() {
    let gateway = StudioGateway::offline();
    let mut plan = CommunicationPlan::new();

    plan.set_story(MessageSlot::Problem, "Mary walked two hours to the clinic.");
    let advice = run(
        &gateway,
        StudioTask::GenerateStoryAdvice {
            story: plan.message(MessageSlot::Problem).story.clone(),
            message_index: 0,
        },
    )
    .await;
    plan.message_mut(MessageSlot::Problem).story_advice = advice.as_text().unwrap().to_string();

    plan.set_story(MessageSlot::Problem, "Mary walked two hours to the clinic.");
    assert!(plan.message(MessageSlot::Problem).story_advice.is_empty());
}

#[test]
fn key_message_candidates_follow_the_claim() {
    let messages = generate_key_messages("No patient should be diagnosed too late.");
    assert_eq!(messages.len(), 7);
    assert!(messages[0].contains("diagnosed too late"));
}
