//! Property-based tests for the member stats invariant.
//!
//! Uses proptest to drive random sequences of archive and history-deletion
//! operations and checks that the counters always equal the history tallies.

use chrono::NaiveDate;
use proptest::prelude::*;
use taskforce_server::domain::{AppData, Member, Outcome, Stats, Task, TaskGroup};
use taskforce_server::store::{DocumentStore, MemoryStore};

#[derive(Debug, Clone)]
enum Op {
    Archive(Outcome),
    DeleteHistory(usize),
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Success), Just(Outcome::Failed)]
}

fn group_strategy() -> impl Strategy<Value = TaskGroup> {
    prop::sample::select(TaskGroup::ALL.to_vec())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        outcome_strategy().prop_map(Op::Archive),
        (0usize..8).prop_map(Op::DeleteHistory),
    ]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        "\\PC{0,24}",
        date_strategy(),
        group_strategy(),
        0u8..=100,
        prop::option::of(outcome_strategy()),
    )
        .prop_map(|(title, deadline, group, progress, outcome)| Task {
            title,
            deadline,
            group,
            progress,
            outcome,
        })
}

fn member_strategy() -> impl Strategy<Value = Member> {
    (
        "[A-Za-z][A-Za-z ]{0,15}",
        task_strategy(),
        prop::collection::vec(task_strategy(), 0..6),
    )
        .prop_map(|(name, mut current, history)| {
            current.outcome = None;
            let mut member = Member::new(&name, today()).unwrap();
            member.current_task = current;
            member.stats = Stats::tally(&history);
            member.history = history;
            member
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: counters equal history tallies after any operation sequence.
    #[test]
    fn stats_match_history_after_any_sequence(
        group in group_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let mut member = Member::new("Prop", today()).unwrap();
        member.current_task.group = group;

        for op in ops {
            match op {
                Op::Archive(outcome) => {
                    member.archive(outcome, today());
                }
                Op::DeleteHistory(index) => {
                    let len = member.history.len();
                    let result = member.delete_history_entry(index);
                    prop_assert_eq!(result.is_ok(), index < len);
                }
            }
            prop_assert_eq!(member.stats, Stats::tally(&member.history));
        }
    }

    /// Property: archiving always resets progress and carries the group.
    #[test]
    fn archive_resets_progress_and_keeps_group(
        group in group_strategy(),
        progress in 0u8..=100,
        outcome in outcome_strategy()
    ) {
        let mut member = Member::new("Prop", today()).unwrap();
        member.current_task.group = group;
        member.current_task.progress = progress;

        member.archive(outcome, today());

        prop_assert_eq!(member.current_task.progress, 0);
        prop_assert_eq!(member.current_task.group, group);
        prop_assert_eq!(member.current_task.outcome, None);
        prop_assert_eq!(member.history[0].outcome, Some(outcome));
        prop_assert_eq!(member.history[0].progress, progress);
    }

    /// Property: deleting history never drives a counter below zero, even
    /// when the counters start out of step with the history.
    #[test]
    fn deleting_history_floors_counters_at_zero(
        success in 0u32..4,
        failed in 0u32..4,
        outcomes in prop::collection::vec(outcome_strategy(), 0..10)
    ) {
        let mut member = Member::new("Prop", today()).unwrap();
        for outcome in &outcomes {
            member.archive(*outcome, today());
        }
        let tally = Stats::tally(&member.history);
        member.stats = Stats { success, failed };

        while !member.history.is_empty() {
            member.delete_history_entry(0).unwrap();
        }

        prop_assert_eq!(member.stats.success, success.saturating_sub(tally.success));
        prop_assert_eq!(member.stats.failed, failed.saturating_sub(tally.failed));
        prop_assert!(member.delete_history_entry(0).is_err());
    }

    /// Property: Load(Replace(d)) == d.
    #[test]
    fn replace_then_load_round_trips(
        members in prop::collection::vec(member_strategy(), 0..5)
    ) {
        let data = AppData { members };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let loaded = runtime.block_on(async {
            let store = MemoryStore::new(&AppData::default()).unwrap();
            let version = store.replace(&data, None).await.unwrap();
            let snapshot = store.load().await.unwrap();
            assert_eq!(snapshot.version, version);
            snapshot.data
        });

        prop_assert_eq!(loaded, data);
    }
}
