use aisim_server::{
    curriculum::{Trail, WEEK_EXAM_INDEX},
    models::domain::ProgressRecord,
    progression::Progression,
    quiz::parser::parse_quiz_text,
    quiz::session::{QuizSession, SessionState, FEEDBACK_DWELL_TICKS, READ_DWELL_TICKS},
};

fn authored_quiz_text() -> String {
    let mut text = String::new();
    for n in 1..=15 {
        text.push_str(&format!(
            "QUESTÃO {n}. Qual alternativa completa a frase {n}?\n\
             Considere o trecho apresentado no material\n\
             a) Primeira opção\n\
             b) Segunda opção\n\
             c) Terceira opção\n\
             d) Quarta opção\n\
             e) Quinta opção\n\
             Resposta correta: c\n\
             Comentário: A terceira opção respeita a concordância.\n\n"
        ));
    }
    text
}

#[test]
fn authored_text_flows_from_parser_to_finished_session() {
    let questions = parse_quiz_text(&authored_quiz_text()).expect("text should parse");
    assert_eq!(questions.len(), 15);
    for question in &questions {
        assert_eq!(question.options.len(), 5);
        assert_eq!(question.correct_answer, 2);
        assert!(question.text.contains("material"));
        assert!(question
            .justification
            .as_deref()
            .is_some_and(|j| j.contains("concordância")));
    }

    // Answer everything correctly, respecting both dwell gates.
    let mut session = QuizSession::new(questions);
    assert!(session.start());
    loop {
        for _ in 0..READ_DWELL_TICKS {
            session.tick();
        }
        assert!(session.select(2));
        assert!(session.confirm());
        for _ in 0..FEEDBACK_DWELL_TICKS {
            session.tick();
        }
        assert!(session.advance());
        if matches!(session.state(), SessionState::Finished { .. }) {
            break;
        }
    }
    assert_eq!(
        *session.state(),
        SessionState::Finished { score_percent: 100 }
    );
}

#[test]
fn completing_week_one_walks_the_unlock_chain() {
    let trail = Trail::weekly();
    let mut record = ProgressRecord::default();

    {
        let progression = Progression::new(&trail, &record);
        assert!(progression.is_lesson_unlocked(1, 0));
        assert!(!progression.is_lesson_unlocked(1, 1));
        assert!(!progression.is_unit_unlocked(2));
    }

    // Work through all ten lessons; the exam stays locked until they are done.
    for lesson_index in 0..WEEK_EXAM_INDEX {
        {
            let progression = Progression::new(&trail, &record);
            assert!(progression.is_lesson_unlocked(1, lesson_index));
            assert!(!progression.is_lesson_unlocked(1, WEEK_EXAM_INDEX));
        }
        record.record_lesson(1, lesson_index, 70);
    }

    {
        let progression = Progression::new(&trail, &record);
        assert!(progression.is_lesson_unlocked(1, WEEK_EXAM_INDEX));
        assert!(!progression.is_unit_complete(1));
        assert!(!progression.is_unit_unlocked(2));
    }

    record.record_lesson(1, WEEK_EXAM_INDEX, 0); // a zero score still completes
    record.record_week(1);

    let progression = Progression::new(&trail, &record);
    assert!(progression.is_unit_complete(1));
    assert!(progression.is_unit_unlocked(2));
    assert!(progression.is_lesson_unlocked(2, 0));
    assert!(!progression.is_lesson_unlocked(3, 0));
}

#[test]
fn two_device_merge_keeps_both_histories_and_local_scores() {
    let mut local = ProgressRecord::default();
    local.record_lesson(1, 0, 90);
    local.record_lesson(1, 1, 80);

    let mut server = ProgressRecord::default();
    server.record_lesson(1, 0, 40); // older attempt from another device
    server.record_lesson(2, 0, 60);

    local.merge_from(&server);

    assert_eq!(local.lesson(1, 0).map(|l| l.score), Some(90));
    assert_eq!(local.lesson(1, 1).map(|l| l.score), Some(80));
    assert_eq!(local.lesson(2, 0).map(|l| l.score), Some(60));
    assert!(local.extends(&server));
    assert!(!server.extends(&local));
}
