//! View logic for the paginated question list: page parsing, the local text
//! filter, per-question vote totals and the percentage bars.

use serde::Serialize;

use crate::routes::Routes;
use super::types::{Choice, PageArgs, Question, QuestionPage};

/// Fixed window size of the question list.
pub const ITEMS_PER_PAGE: i64 = 100;

/// Page index from the raw `page` query value. Missing, non-numeric or
/// negative values all mean the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|p| p.max(0))
        .unwrap_or(0)
}

/// Fetch arguments for a page index: ascending ids, `ITEMS_PER_PAGE` rows.
pub fn page_args(page: i64) -> PageArgs {
    PageArgs {
        skip: ITEMS_PER_PAGE.saturating_mul(page.max(0)),
        take: ITEMS_PER_PAGE,
    }
}

/// Case-sensitive substring match; the empty pattern matches everything.
pub fn matches_filter(question: &Question, pattern: &str) -> bool {
    question.text.contains(pattern)
}

/// The questions whose text contains `pattern`, in their original order.
pub fn filter_questions(questions: Vec<Question>, pattern: &str) -> Vec<Question> {
    questions.into_iter().filter(|q| matches_filter(q, pattern)).collect()
}

/// Sum of the votes over all choices; zero when there are none.
pub fn total_votes(question: &Question) -> i64 {
    question.choices.iter().map(|c| c.votes).sum()
}

/// Width of a choice's bar in percent of its question's total.
/// A zero total yields 0% rather than a non-finite width.
pub fn bar_width(votes: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 * 100.0) / total as f64
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceBar {
    pub id: i64,
    pub text: String,
    pub votes: i64,
    pub width: f64,
}

impl ChoiceBar {
    fn new(choice: Choice, total: i64) -> Self {
        ChoiceBar {
            width: bar_width(choice.votes, total),
            id: choice.id,
            text: choice.text,
            votes: choice.votes,
        }
    }
}

/// A filtered question paired with its own total, so totals can never drift
/// out of step with the filtered list.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCard {
    pub id: i64,
    pub text: String,
    pub href: String,
    pub total_votes: i64,
    pub bars: Vec<ChoiceBar>,
}

impl QuestionCard {
    pub fn from_question(question: Question) -> Self {
        let total = total_votes(&question);
        QuestionCard {
            href: Routes::show_question(question.id),
            id: question.id,
            text: question.text,
            total_votes: total,
            bars: question.choices.into_iter().map(|c| ChoiceBar::new(c, total)).collect(),
        }
    }
}

/// Previous/next state for the list. Both actions are plain navigation to
/// another page index; the current filter travels along.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub has_more: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub prev_page: i64,
    pub next_page: i64,
}

impl Pagination {
    pub fn new(page: i64, has_more: bool) -> Self {
        Pagination {
            page,
            has_more,
            prev_disabled: page == 0,
            next_disabled: !has_more,
            prev_page: page - 1,
            next_page: page.saturating_add(1),
        }
    }

    /// Target of the "Previous" action, or `None` while it is disabled.
    pub fn previous(&self, filter: &str) -> Option<String> {
        (!self.prev_disabled).then(|| Routes::questions(self.prev_page, filter))
    }

    /// Target of the "Next" action, or `None` while it is disabled.
    pub fn next(&self, filter: &str) -> Option<String> {
        (!self.next_disabled).then(|| Routes::questions(self.next_page, filter))
    }
}

/// Everything the list page renders for one request.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsList {
    pub filter: String,
    pub cards: Vec<QuestionCard>,
    pub pagination: Pagination,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl QuestionsList {
    pub fn build(page: i64, fetched: QuestionPage, filter: &str) -> Self {
        let cards = filter_questions(fetched.questions, filter)
            .into_iter()
            .map(QuestionCard::from_question)
            .collect();

        let pagination = Pagination::new(page, fetched.has_more);

        QuestionsList {
            filter: filter.to_string(),
            cards,
            prev_href: pagination.previous(filter),
            next_href: pagination.next(filter),
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: i64, votes: i64) -> Choice {
        Choice { id, text: format!("choice {id}"), votes }
    }

    fn question(id: i64, text: &str, choices: Vec<Choice>) -> Question {
        Question { id, text: text.to_string(), choices }
    }

    #[test]
    fn parse_page_defaults_to_zero() {
        assert_eq!(parse_page(None), 0);
        assert_eq!(parse_page(Some("")), 0);
        assert_eq!(parse_page(Some("abc")), 0);
        assert_eq!(parse_page(Some("-3")), 0);
        assert_eq!(parse_page(Some("4")), 4);
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }

    #[test]
    fn page_args_use_fixed_window() {
        let args = page_args(3);
        assert_eq!(args.skip, 300);
        assert_eq!(args.take, ITEMS_PER_PAGE);
        assert_eq!(page_args(0).skip, 0);
    }

    #[test]
    fn page_args_saturate_on_huge_pages() {
        assert_eq!(page_args(i64::MAX).skip, i64::MAX);
    }

    #[test]
    fn empty_filter_is_identity() {
        let qs = vec![
            question(1, "Color?", vec![]),
            question(2, "Pet?", vec![]),
        ];
        let filtered = filter_questions(qs, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 2);
    }

    #[test]
    fn filter_is_case_sensitive_and_keeps_order() {
        let qs = vec![
            question(1, "Favorite color?", vec![]),
            question(2, "Favorite pet?", vec![]),
            question(3, "Best colour?", vec![]),
            question(4, "Color of the sky?", vec![]),
        ];
        let ids: Vec<i64> = filter_questions(qs.clone(), "col").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
        let ids: Vec<i64> = filter_questions(qs, "Color").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn totals_sum_choices_or_zero() {
        assert_eq!(total_votes(&question(1, "Color?", vec![choice(1, 3), choice(2, 1)])), 4);
        assert_eq!(total_votes(&question(2, "Empty?", vec![])), 0);
        assert_eq!(total_votes(&question(3, "Unvoted?", vec![choice(1, 0), choice(2, 0)])), 0);
    }

    #[test]
    fn bar_width_is_share_of_total() {
        assert_eq!(bar_width(3, 4), 75.0);
        assert_eq!(bar_width(1, 4), 25.0);
        assert_eq!(bar_width(0, 4), 0.0);
    }

    #[test]
    fn bar_width_clamps_zero_total() {
        let w = bar_width(0, 0);
        assert!(w.is_finite());
        assert_eq!(w, 0.0);
    }

    #[test]
    fn pagination_flags() {
        let first = Pagination::new(0, true);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);
        assert_eq!(first.next_page, 1);
        assert!(first.previous("").is_none());
        assert_eq!(first.next("").as_deref(), Some("/questions?page=1"));

        let last = Pagination::new(2, false);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);
        assert_eq!(last.previous("").as_deref(), Some("/questions?page=1"));
        assert!(last.next("").is_none());
    }

    #[test]
    fn build_keeps_totals_aligned_with_filtered_questions() {
        let fetched = QuestionPage {
            questions: vec![
                question(1, "Dog or cat?", vec![choice(1, 10), choice(2, 30)]),
                question(2, "Color?", vec![choice(3, 3), choice(4, 1)]),
                question(3, "No choices yet", vec![]),
            ],
            has_more: false,
            count: 3,
        };

        let list = QuestionsList::build(0, fetched, "o");
        let totals: Vec<(i64, i64)> = list.cards.iter().map(|c| (c.id, c.total_votes)).collect();
        assert_eq!(totals, vec![(1, 40), (2, 4), (3, 0)]);

        let color = &list.cards[1];
        assert_eq!(color.bars[0].width, 75.0);
        assert_eq!(color.bars[1].width, 25.0);
        assert!(list.cards[2].bars.is_empty());
    }

    #[test]
    fn build_drops_unmatched_questions_before_totalling() {
        let fetched = QuestionPage {
            questions: vec![
                question(1, "Dog or cat?", vec![choice(1, 10), choice(2, 30)]),
                question(2, "Color?", vec![choice(3, 3), choice(4, 1)]),
            ],
            has_more: true,
            count: 250,
        };

        let list = QuestionsList::build(1, fetched, "Color");
        assert_eq!(list.cards.len(), 1);
        assert_eq!(list.cards[0].id, 2);
        assert_eq!(list.cards[0].total_votes, 4);
        assert_eq!(list.cards[0].href, "/questions/2");
        assert_eq!(list.prev_href.as_deref(), Some("/questions?page=0&filter=Color"));
        assert_eq!(list.next_href.as_deref(), Some("/questions?page=2&filter=Color"));
    }

    #[test]
    fn build_cards_follow_filtered_subsequence() {
        let questions = vec![
            question(5, "Favorite color?", vec![choice(1, 2)]),
            question(6, "Favorite pet?", vec![]),
            question(9, "Best color scheme?", vec![choice(2, 1), choice(3, 1)]),
            question(12, "Color or colour?", vec![]),
        ];
        let expected: Vec<i64> = filter_questions(questions.clone(), "color").iter().map(|q| q.id).collect();

        let fetched = QuestionPage { questions, has_more: false, count: 4 };
        let list = QuestionsList::build(0, fetched, "color");
        let ids: Vec<i64> = list.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(ids, vec![5, 9]);
        let totals: Vec<i64> = list.cards.iter().map(|c| c.total_votes).collect();
        assert_eq!(totals, vec![2, 2]);
    }
}
