use rand::seq::SliceRandom;

use crate::domain::QuizQuestion;

const PLACEHOLDER_ANSWERS: [&str; 4] = ["Answer A", "Answer B", "Answer C", "Answer D"];

/// Repairs structurally incomplete quiz items in place, then shuffles each
/// item's answers while keeping track of which one is correct.
///
/// Per item, in this order: items missing `possible_answers` or `index` are
/// left alone; fewer than 2 answers gets the canonical placeholder set with
/// index 0 and no shuffle; 2-3 answers are padded to 4 with "Option N"
/// entries; an out-of-range index is reset to 0 after padding. The ordering
/// (minimum check, pad, reset) is observable through the repaired items and
/// must not change.
///
/// The shuffle runs on a copy: the new order and index are only committed
/// when the correct answer's text is found again by equality, so duplicate
/// or degenerate answer sets cannot corrupt an item.
pub fn normalize_quiz(questions: &mut [QuizQuestion]) {
    for item in questions.iter_mut() {
        let (answers, index) = match (item.possible_answers.as_mut(), item.index) {
            (Some(answers), Some(index)) => (answers, index),
            _ => continue,
        };

        if answers.len() < 2 {
            *answers = PLACEHOLDER_ANSWERS.iter().map(|s| s.to_string()).collect();
            item.index = Some(0);
            continue;
        }

        while answers.len() < 4 {
            answers.push(format!("Option {}", answers.len() + 1));
        }

        let mut index = index;
        if index < 0 || index as usize >= answers.len() {
            index = 0;
        }

        let correct = answers[index as usize].clone();
        let mut shuffled = answers.clone();
        shuffled.shuffle(&mut rand::thread_rng());
        match shuffled.iter().position(|answer| *answer == correct) {
            Some(position) => {
                *answers = shuffled;
                item.index = Some(position as i64);
            }
            None => item.index = Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(item: &QuizQuestion) -> &Vec<String> {
        item.possible_answers.as_ref().unwrap()
    }

    fn correct_answer(item: &QuizQuestion) -> &str {
        &answers(item)[item.index.unwrap() as usize]
    }

    #[test]
    fn well_formed_item_keeps_its_correct_answer() {
        let mut questions = vec![QuizQuestion::new(
            "Q?",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            2,
        )];
        normalize_quiz(&mut questions);

        let item = &questions[0];
        assert_eq!(answers(item).len(), 4);
        assert_eq!(correct_answer(item), "c");
        let mut sorted = answers(item).clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn missing_fields_pass_through_untouched() {
        let mut questions = vec![
            QuizQuestion {
                question: "no answers".into(),
                possible_answers: None,
                index: Some(1),
            },
            QuizQuestion {
                question: "no index".into(),
                possible_answers: Some(vec!["a".into(), "b".into()]),
                index: None,
            },
        ];
        normalize_quiz(&mut questions);

        assert!(questions[0].possible_answers.is_none());
        assert_eq!(questions[0].index, Some(1));
        assert_eq!(questions[1].possible_answers.as_ref().unwrap().len(), 2);
        assert!(questions[1].index.is_none());
    }

    #[test]
    fn single_answer_gets_placeholder_set_without_shuffle() {
        let mut questions = vec![QuizQuestion::new("Q?", vec!["only".into()], 0)];
        normalize_quiz(&mut questions);

        let item = &questions[0];
        assert_eq!(
            answers(item),
            &vec!["Answer A", "Answer B", "Answer C", "Answer D"]
        );
        assert_eq!(item.index, Some(0));
    }

    #[test]
    fn short_item_is_padded_and_correct_answer_survives() {
        let mut questions = vec![QuizQuestion::new(
            "Q?",
            vec!["left".into(), "right".into(), "middle".into()],
            2,
        )];
        normalize_quiz(&mut questions);

        let item = &questions[0];
        assert_eq!(answers(item).len(), 4);
        assert!(answers(item).iter().any(|a| a == "Option 4"));
        assert_eq!(correct_answer(item), "middle");
    }

    #[test]
    fn out_of_range_index_resets_after_padding() {
        let mut questions = vec![QuizQuestion::new("X", vec!["A".into(), "B".into()], 5)];
        normalize_quiz(&mut questions);

        let item = &questions[0];
        assert_eq!(answers(item).len(), 4);
        let index = item.index.unwrap();
        assert!((0..4).contains(&index));
        // Padding runs before the bounds reset, so the reset lands on the
        // first original answer, not on a placeholder.
        assert_eq!(correct_answer(item), "A");
    }

    #[test]
    fn negative_index_resets_to_first_answer() {
        let mut questions = vec![QuizQuestion::new(
            "Q?",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            -1,
        )];
        normalize_quiz(&mut questions);
        assert_eq!(correct_answer(&questions[0]), "a");
    }

    #[test]
    fn normalization_repairs_every_item_in_a_batch() {
        let mut questions = vec![
            QuizQuestion::new("1", vec!["a".into(), "b".into(), "c".into(), "d".into()], 3),
            QuizQuestion::new("2", vec!["x".into(), "y".into()], 1),
        ];
        normalize_quiz(&mut questions);

        for item in &questions {
            assert_eq!(answers(item).len(), 4);
            let index = item.index.unwrap();
            assert!((0..4).contains(&index));
        }
        assert_eq!(correct_answer(&questions[0]), "d");
        assert_eq!(correct_answer(&questions[1]), "y");
    }
}
