//! The built-in item bank.
//!
//! Items are listed in canonical order, rotating through EI, SN, TF, JP so
//! every 15-question stage touches all four axes. The first label of an
//! item always describes the first-listed pole of its axis.

use compass_types::{Axis, CompassResult, Question, QuestionOption, QuestionSet, Seed};

use crate::provider::{validate_question_set, QuestionSetProvider};
use crate::{FIRST_OPTION_VALUE, SECOND_OPTION_VALUE};

/// One bank entry before it becomes a [`Question`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankItem {
    /// Stable question id
    pub key: &'static str,
    pub axis: Axis,
    pub text: &'static str,
    /// Label for the first-listed pole (E, S, T, J)
    pub first: &'static str,
    /// Label for the second-listed pole (I, N, F, P)
    pub second: &'static str,
}

const fn item(
    key: &'static str,
    axis: Axis,
    text: &'static str,
    first: &'static str,
    second: &'static str,
) -> BankItem {
    BankItem {
        key,
        axis,
        text,
        first,
        second,
    }
}

impl BankItem {
    /// Build the question with the first-listed pole as option A.
    pub fn to_question(&self) -> CompassResult<Question> {
        Question::new(
            self.key,
            self.text,
            QuestionOption::new(self.first, FIRST_OPTION_VALUE, self.axis.first()),
            QuestionOption::new(self.second, SECOND_OPTION_VALUE, self.axis.second()),
        )
    }
}

/// The standard 60-item work-style bank.
pub const STANDARD_ITEMS: [BankItem; 60] = [
    item("ei-01", Axis::EI, "After a long week, you recharge by...", "Meeting up with friends or colleagues", "Spending quiet time on your own"),
    item("sn-01", Axis::SN, "When reading a project brief, you focus on...", "The concrete facts and figures", "The big picture and what it implies"),
    item("tf-01", Axis::TF, "When making a tough call, you weigh...", "Logic and objective criteria", "The impact on the people involved"),
    item("jp-01", Axis::JP, "Your to-do list is usually...", "Planned and prioritized", "Loose and flexible"),
    item("ei-02", Axis::EI, "In meetings, you tend to...", "Think out loud and build on ideas as you speak", "Listen first and share once your thoughts are formed"),
    item("sn-02", Axis::SN, "You put more trust in...", "What has worked before", "Your hunches about what could work"),
    item("tf-02", Axis::TF, "When giving feedback, you lean toward being...", "Direct and candid", "Tactful and encouraging"),
    item("jp-02", Axis::JP, "Deadlines are...", "Targets to finish well ahead of", "Prompts that spark a final push"),
    item("ei-03", Axis::EI, "When starting a new project, you prefer to...", "Kick off with a group brainstorm", "Sketch out your own ideas first"),
    item("sn-03", Axis::SN, "When explaining something, you...", "Walk through it step by step", "Start with the overall idea and an analogy"),
    item("tf-03", Axis::TF, "In a disagreement, you aim for...", "The correct answer", "An outcome everyone can accept"),
    item("jp-03", Axis::JP, "When travelling, you prefer...", "A set itinerary", "Deciding as you go"),
    item("ei-04", Axis::EI, "Your ideal workspace is...", "An open, lively floor", "A quiet, private corner"),
    item("sn-04", Axis::SN, "You are more drawn to...", "Improving how things work today", "Imagining how things could work tomorrow"),
    item("tf-04", Axis::TF, "You are more convinced by...", "A sound argument", "A heartfelt appeal"),
    item("jp-04", Axis::JP, "You like decisions to be...", "Settled early", "Left open while more information arrives"),
    item("ei-05", Axis::EI, "When you meet new teammates, you...", "Introduce yourself right away", "Wait for a natural moment"),
    item("sn-05", Axis::SN, "In a new role, you want...", "Clear instructions and examples", "Room to work out your own approach"),
    item("tf-05", Axis::TF, "A good manager is above all...", "Fair and consistent", "Caring and supportive"),
    item("jp-05", Axis::JP, "Your desk is usually...", "Organized", "A creative mess"),
    item("ei-06", Axis::EI, "When you are stuck on a problem, you...", "Talk it through with someone", "Step away and think it over alone"),
    item("sn-06", Axis::SN, "You tend to notice first...", "Details others miss", "Patterns and connections others miss"),
    item("tf-06", Axis::TF, "When a teammate makes a mistake, you first...", "Analyze what went wrong", "Check how they are doing"),
    item("jp-06", Axis::JP, "A sudden change of plans makes you feel...", "Unsettled", "Energized"),
    item("ei-07", Axis::EI, "Your calendar feels best with...", "Plenty of conversations and check-ins", "Long uninterrupted focus blocks"),
    item("sn-07", Axis::SN, "A good plan is...", "Practical and realistic", "Inventive and ambitious"),
    item("tf-07", Axis::TF, "You would rather be seen as...", "Competent", "Kind"),
    item("jp-07", Axis::JP, "You work best...", "Steadily, according to a schedule", "In bursts when inspiration strikes"),
    item("ei-08", Axis::EI, "At a company event, you...", "Circulate and meet many people", "Stay with a few people you know well"),
    item("sn-08", Axis::SN, "You prefer tasks that are...", "Hands-on and tangible", "Conceptual and theoretical"),
    item("tf-08", Axis::TF, "Decisions should rest on...", "Principles that apply to everyone", "The circumstances of each person"),
    item("jp-08", Axis::JP, "Before starting a project, you...", "Define the plan and milestones", "Dive in and shape it along the way"),
    item("ei-09", Axis::EI, "You prefer to receive feedback...", "In a live conversation", "In writing you can digest"),
    item("sn-09", Axis::SN, "When solving a problem, you rely on...", "Proven methods", "Fresh angles"),
    item("tf-09", Axis::TF, "In a review, you focus on...", "What can be improved", "What went well and who helped"),
    item("jp-09", Axis::JP, "Meetings should...", "Follow an agenda", "Go where the conversation leads"),
    item("ei-10", Axis::EI, "In a group chat, you usually...", "Reply quickly and keep the thread going", "Read along and chime in when it matters"),
    item("sn-10", Axis::SN, "You describe past events...", "Literally, as they happened", "Through what they meant"),
    item("tf-10", Axis::TF, "Choosing between two job offers, you weigh...", "Salary, growth and the numbers", "The team and how you would feel there"),
    item("jp-10", Axis::JP, "You would rather...", "Finish one thing before starting another", "Juggle several things at once"),
    item("ei-11", Axis::EI, "When presenting your work, you...", "Enjoy the spotlight and the questions", "Prefer sharing a written update"),
    item("sn-11", Axis::SN, "You would rather be known as...", "Sensible", "Imaginative"),
    item("tf-11", Axis::TF, "Criticism of your work feels...", "Like useful information", "Personal, at least at first"),
    item("jp-11", Axis::JP, "Rules and processes are...", "Helpful structure", "Guidelines to bend when needed"),
    item("ei-12", Axis::EI, "You learn a new tool best by...", "Pairing with someone who knows it", "Working through the docs alone"),
    item("sn-12", Axis::SN, "A roadmap should focus on...", "Next quarter's deliverables", "Where the product is heading in five years"),
    item("tf-12", Axis::TF, "You value more in a colleague...", "Sharp reasoning", "Warmth and empathy"),
    item("jp-12", Axis::JP, "On a free weekend, you...", "Plan your activities in advance", "See what you feel like doing"),
    item("ei-13", Axis::EI, "After a day full of meetings, your energy is...", "Higher than when you started", "Noticeably drained"),
    item("sn-13", Axis::SN, "When assembling furniture, you...", "Follow the instructions closely", "Glance at the picture and improvise"),
    item("tf-13", Axis::TF, "When prioritizing requests, you go by...", "Business impact", "Who needs help the most"),
    item("jp-13", Axis::JP, "When a task is done, you...", "Close it out and move on", "Keep refining it"),
    item("ei-14", Axis::EI, "To celebrate a team win, you would rather...", "Throw a party for everyone", "Have a small dinner with close teammates"),
    item("sn-14", Axis::SN, "When someone pitches an idea, you ask for...", "The data behind it", "The story behind it"),
    item("tf-14", Axis::TF, "In a debate, you...", "Play devil's advocate to test ideas", "Look for common ground"),
    item("jp-14", Axis::JP, "You feel most comfortable when things are...", "Decided", "Open-ended"),
    item("ei-15", Axis::EI, "You find it easier to...", "Start conversations with strangers", "Deepen conversations with people you know"),
    item("sn-15", Axis::SN, "You find more satisfying...", "Perfecting a reliable process", "Exploring an untested idea"),
    item("tf-15", Axis::TF, "When your team is split on an approach, you...", "Pick the strongest option on its merits", "Find a path that keeps everyone on board"),
    item("jp-15", Axis::JP, "Your approach to email is...", "Inbox zero on a routine", "Handle what is urgent as it comes up"),
];

/// A bank of items served in canonical order.
#[derive(Clone, Debug)]
pub struct ItemBank {
    items: Vec<BankItem>,
}

impl ItemBank {
    /// The standard 60-item bank.
    pub fn standard() -> Self {
        Self {
            items: STANDARD_ITEMS.to_vec(),
        }
    }

    pub fn new(items: Vec<BankItem>) -> Self {
        Self { items }
    }

    /// Keep only the first `n` items of each axis, preserving order.
    ///
    /// Used for short demo runs; `n = 0` leaves an empty bank.
    pub fn with_items_per_axis(&self, n: usize) -> Self {
        let mut taken = compass_types::PerAxis::<usize>::default();
        let items = self
            .items
            .iter()
            .filter(|item| {
                let count = taken.get_mut(item.axis);
                *count += 1;
                *count <= n
            })
            .copied()
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[BankItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Questions in canonical order.
    pub fn questions(&self) -> CompassResult<Vec<Question>> {
        self.items.iter().map(BankItem::to_question).collect()
    }
}

impl Default for ItemBank {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuestionSetProvider for ItemBank {
    fn question_set(&self, seed: &Seed) -> CompassResult<QuestionSet> {
        validate_question_set(seed, self.questions()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_bank_shape() {
        let bank = ItemBank::standard();
        assert_eq!(bank.len(), 60);

        let set = bank.question_set(&Seed::Numeric(1)).unwrap();
        assert_eq!(set.len(), 60);
        for axis in Axis::ALL {
            assert_eq!(*set.axis_counts().get(axis), 15);
        }
        assert!(set.uncovered_axis().is_none());
    }

    #[test]
    fn test_keys_unique_and_match_axis() {
        let mut keys = HashSet::new();
        for item in STANDARD_ITEMS {
            assert!(keys.insert(item.key), "duplicate key {}", item.key);
            let prefix = item.axis.as_str().to_ascii_lowercase();
            assert!(item.key.starts_with(&prefix), "{} tagged {}", item.key, item.axis);
        }
    }

    #[test]
    fn test_every_stage_touches_every_axis() {
        let set = ItemBank::standard()
            .question_set(&Seed::Numeric(1))
            .unwrap();
        for stage in set.questions().chunks(15) {
            let axes: HashSet<_> = stage.iter().map(|q| q.axis()).collect();
            assert_eq!(axes.len(), 4);
        }
    }

    #[test]
    fn test_option_a_is_first_pole() {
        let q = STANDARD_ITEMS[2].to_question().unwrap();
        assert_eq!(q.options[0].value, FIRST_OPTION_VALUE);
        assert_eq!(q.options[0].pole, Axis::TF.first());
        assert_eq!(q.options[1].pole, Axis::TF.second());
    }

    #[test]
    fn test_items_per_axis() {
        let small = ItemBank::standard().with_items_per_axis(5);
        assert_eq!(small.len(), 20);
        let set = small.question_set(&Seed::Numeric(9)).unwrap();
        for axis in Axis::ALL {
            assert_eq!(*set.axis_counts().get(axis), 5);
        }

        let empty = ItemBank::standard().with_items_per_axis(0);
        assert!(empty.question_set(&Seed::Numeric(9)).is_err());
    }
}
