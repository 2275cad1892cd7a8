//! Built-in starter knowledge.
//!
//! A small animal-guessing dataset installed on first run so the game has
//! something to work with before anyone teaches it. All five answer
//! values appear, and a couple of pairs are left unobserved on purpose:
//! inference reads those as unknown, exactly like gaps produced by live
//! play.

use crate::answer::Answer;
use crate::answer::Answer::{Doubtful, No, Probably, Unknown, Yes};
use crate::knowledge::{ClassId, Knowledge, QuestionId};

const CLASSES: [&str; 8] = [
    "Dog", "Cat", "Horse", "Eagle", "Penguin", "Dolphin", "Snake", "Octopus",
];

const QUESTIONS: [&str; 8] = [
    "Is it a mammal?",
    "Can it fly?",
    "Does it live in water?",
    "Is it commonly kept as a pet?",
    "Is it larger than an adult human?",
    "Does it have legs?",
    "Is it a bird?",
    "Does it hunt other animals?",
];

#[rustfmt::skip]
const OBSERVATIONS: [(usize, usize, Answer); 62] = [
    // Dog
    (0, 0, Yes), (0, 1, No), (0, 2, No), (0, 3, Yes),
    (0, 4, No), (0, 5, Yes), (0, 6, No), (0, 7, Doubtful),
    // Cat
    (1, 0, Yes), (1, 1, No), (1, 2, No), (1, 3, Yes),
    (1, 4, No), (1, 5, Yes), (1, 6, No), (1, 7, Yes),
    // Horse (whether it hunts was never recorded)
    (2, 0, Yes), (2, 1, No), (2, 2, No), (2, 3, Probably),
    (2, 4, Yes), (2, 5, Yes), (2, 6, No),
    // Eagle
    (3, 0, No), (3, 1, Yes), (3, 2, No), (3, 3, No),
    (3, 4, No), (3, 5, Yes), (3, 6, Yes), (3, 7, Yes),
    // Penguin (size was never recorded)
    (4, 0, No), (4, 1, No), (4, 2, Probably), (4, 3, No),
    (4, 5, Yes), (4, 6, Yes), (4, 7, Yes),
    // Dolphin
    (5, 0, Yes), (5, 1, No), (5, 2, Yes), (5, 3, No),
    (5, 4, Yes), (5, 5, No), (5, 6, No), (5, 7, Yes),
    // Snake
    (6, 0, No), (6, 1, No), (6, 2, Doubtful), (6, 3, Probably),
    (6, 4, No), (6, 5, No), (6, 6, No), (6, 7, Yes),
    // Octopus
    (7, 0, No), (7, 1, No), (7, 2, Yes), (7, 3, Doubtful),
    (7, 4, Unknown), (7, 5, No), (7, 6, No), (7, 7, Yes),
];

/// Build the starter knowledge base.
pub fn starter_knowledge() -> Knowledge {
    let mut knowledge = Knowledge::new();
    for name in CLASSES {
        knowledge.register_class(name);
    }
    for text in QUESTIONS {
        knowledge.register_question(text);
    }
    for (class, question, value) in OBSERVATIONS {
        knowledge.record_observation(ClassId(class), QuestionId(question), value);
    }
    knowledge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_shape() {
        let k = starter_knowledge();
        assert_eq!(k.class_count(), 8);
        assert_eq!(k.question_count(), 8);
        assert_eq!(k.observation_count(), 62);
    }

    #[test]
    fn test_starter_uses_the_full_answer_vocabulary() {
        let k = starter_knowledge();
        for answer in Answer::ALL {
            assert!(
                k.observations().any(|(_, _, value)| value == answer),
                "starter set never uses {answer}"
            );
        }
    }

    #[test]
    fn test_starter_leaves_some_pairs_unobserved() {
        let k = starter_knowledge();
        let horse = k.find_class("Horse").unwrap();
        let hunts = k.find_question("Does it hunt other animals?").unwrap();
        assert_eq!(k.observation(horse, hunts), None);
        assert_eq!(k.value_or_unknown(horse, hunts), Answer::Unknown);
    }

    #[test]
    fn test_starter_rows_are_distinct() {
        // Two identical rows would make their classes inseparable.
        let k = starter_knowledge();
        let rows: Vec<Vec<Answer>> = k
            .class_ids()
            .map(|c| {
                k.question_ids()
                    .map(|q| k.value_or_unknown(c, q))
                    .collect()
            })
            .collect();
        for (i, a) in rows.iter().enumerate() {
            for b in rows.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
