use std::io::Write;

use notai_nlp::{
    answer::{NEED_BOTH_MESSAGE, NO_RELEVANT_MESSAGE},
    classify_question_type, AnswerEngine, AnswerRequest, LinguisticFrontEnd, NlpConfig,
    NlpRuntime, QuestionType,
};

const NOTE: &str = "Alexander Fleming discovered penicillin in London in 1928. \
    It kills bacteria because it breaks their cell walls. \
    To grow the mold, follow these steps: keep it warm and feed it sugar. \
    An antibiotic is a drug that fights bacteria.";

#[test]
fn missing_person_is_a_message_not_a_panic() {
    let answer =
        AnswerEngine::default().answer_question("Who is mentioned?", "The cat sat on the mat.");
    assert!(answer.starts_with("I couldn't find"), "{answer}");
}

#[test]
fn blank_question_needs_both_inputs() {
    let engine = AnswerEngine::default();
    assert_eq!(engine.answer_question("", "some note"), NEED_BOTH_MESSAGE);
    assert_eq!(engine.answer_question("What?", ""), NEED_BOTH_MESSAGE);
}

#[test]
fn typed_answers_over_one_note() {
    let engine = AnswerEngine::default();
    assert_eq!(
        engine.answer_question("Who discovered penicillin?", NOTE),
        "Based on your note, Alexander Fleming is mentioned. \
         Alexander Fleming discovered penicillin in London in 1928."
    );
    assert_eq!(
        engine.answer_question("Where was penicillin discovered?", NOTE),
        "The note mentions these locations: London. \
         Alexander Fleming discovered penicillin in London in 1928."
    );
    assert_eq!(
        engine.answer_question("When was penicillin discovered?", NOTE),
        "Time references in your note include: 1928."
    );
    assert_eq!(
        engine.answer_question("Why does penicillin kill bacteria?", NOTE),
        "The reason mentioned in your note appears to be: \
         It kills bacteria because it breaks their cell walls."
    );
    assert_eq!(
        engine.answer_question("What is an antibiotic?", NOTE),
        "According to your note: An antibiotic is a drug that fights bacteria."
    );
    assert_eq!(
        engine.answer_question("Do you know anything about volcanoes?", NOTE),
        NO_RELEVANT_MESSAGE
    );
}

#[test]
fn classification_depends_only_on_the_question() {
    let front = LinguisticFrontEnd::shared();
    let questions = [
        ("Which mold grew?", QuestionType::Selection),
        ("Can mold grow?", QuestionType::Ability),
        ("Could it spread?", QuestionType::Possibility),
        ("Would it help?", QuestionType::Hypothetical),
        ("Should we wait?", QuestionType::Advice),
        ("Are they safe?", QuestionType::Confirmation),
        ("Does it work?", QuestionType::Action),
        ("Explain penicillin", QuestionType::General),
    ];
    for (question, expected) in questions {
        assert_eq!(classify_question_type(&front, question), expected);
        assert_eq!(
            classify_question_type(&LinguisticFrontEnd::unavailable(), question),
            expected
        );
    }
}

#[test]
fn unavailable_resources_still_answer() {
    let engine = AnswerEngine::new(
        LinguisticFrontEnd::unavailable(),
        NlpConfig::default().answer,
        None,
    );
    assert_eq!(
        engine.answer_question("Who discovered penicillin?", NOTE),
        NO_RELEVANT_MESSAGE
    );
}

#[test]
fn runtime_reads_config_and_lexicon_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = dir.path().join("lexicon.toml");
    let mut file = std::fs::File::create(&lexicon).unwrap();
    writeln!(file, "names = [\"zorblat\"]\nplaces = [\"quenville\"]").unwrap();
    let config_path = dir.path().join("notai.toml");
    std::fs::write(
        &config_path,
        "[generator]\nseed = 5\n\n[resources]\nextra_lexicon = \"lexicon.toml\"\n\n[logging]\nlog_path = \"notai.log\"\n",
    )
    .unwrap();

    let config = NlpConfig::load(&config_path).unwrap();
    let runtime = NlpRuntime::from_config(&config).unwrap();
    let answer = runtime.answer(
        "Where did Zorblat travel?",
        "Zorblat traveled to Quenville last spring.",
    );
    assert_eq!(
        answer,
        "The note mentions these locations: Quenville. Zorblat traveled to Quenville last spring."
    );
    let log = std::fs::read_to_string(dir.path().join("notai.log")).unwrap();
    assert!(log.contains("nlp.answer.generated"));
}

#[tokio::test]
async fn batch_answers_keep_order() {
    let runtime = NlpRuntime::default();
    let answers = runtime
        .answer_batch(vec![
            AnswerRequest::new("When was penicillin discovered?", NOTE),
            AnswerRequest::new("", NOTE),
        ])
        .await
        .unwrap();
    assert_eq!(
        answers,
        vec![
            "Time references in your note include: 1928.".to_string(),
            NEED_BOTH_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn summaries_pick_leading_sentences() {
    let engine = AnswerEngine::default();
    let summary = engine.summarize(NOTE);
    assert!(summary.starts_with("Alexander Fleming discovered penicillin"), "{summary}");
    assert!(engine.main_topics(NOTE).len() <= 5);
}
