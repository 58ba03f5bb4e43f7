use proptest::prelude::*;

use wrr_scheduler::{Candidate, Cursor, ShareTally, UeId, schedule, weighted_round_robin};

use mock_allocator::{Answer, MockAllocator};

/// Three active UEs with weights 1, 2 and 4; ids equal roster positions.
fn roster_124() -> Vec<Candidate> {
    vec![
        Candidate::active(0, 1),
        Candidate::active(1, 2),
        Candidate::active(2, 4),
    ]
}

#[test]
fn empty_roster_issues_nothing() -> anyhow::Result<()> {
    for raw in [0, 5, -3, i64::MAX] {
        let mut alloc = MockAllocator::always_succeeds();
        let out = schedule(&[], Cursor::new(raw), Some(&mut alloc))?;

        assert!(alloc.calls.is_empty());
        assert_eq!(out.attempts, 0);
        assert_eq!(out.next_cursor, Cursor::new(0));
    }
    Ok(())
}

#[test]
fn no_eligible_keeps_cursor() -> anyhow::Result<()> {
    let roster = vec![
        Candidate::new(0, 1, false),
        Candidate::new(1, 2, false),
        Candidate::new(2, 4, false),
    ];
    let mut alloc = MockAllocator::always_succeeds();
    let out = schedule(&roster, Cursor::new(5), Some(&mut alloc))?;

    assert!(alloc.calls.is_empty());
    assert_eq!(out.next_cursor, Cursor::new(2));
    Ok(())
}

#[test]
fn attempts_match_weights_in_order() -> anyhow::Result<()> {
    let mut alloc = MockAllocator::always_succeeds();
    let out = schedule(&roster_124(), Cursor::new(0), Some(&mut alloc))?;

    assert_eq!(alloc.calls, vec![0, 1, 1, 2, 2, 2, 2]);
    assert_eq!(out.attempts, 7);
    assert_eq!(out.grants, 7);
    Ok(())
}

#[test]
fn full_success_wraps_cursor() -> anyhow::Result<()> {
    let mut alloc = MockAllocator::always_succeeds();
    let out = schedule(&roster_124(), Cursor::new(0), Some(&mut alloc))?;

    assert_eq!(out.next_cursor, Cursor::new(0));
    Ok(())
}

#[test]
fn total_failure_freezes_cursor() -> anyhow::Result<()> {
    for raw in [0, 1, 2, 4, -1] {
        let mut alloc = MockAllocator::always_fails();
        let out = schedule(&roster_124(), Cursor::new(raw), Some(&mut alloc))?;

        // Every attempt is still made.
        assert_eq!(alloc.calls.len(), 7);
        assert_eq!(out.grants, 0);
        assert_eq!(out.next_cursor, Cursor::new(raw).normalized(3));
    }
    Ok(())
}

#[test]
fn shares_follow_weights_without_contention() {
    let roster = roster_124();
    let mut alloc = MockAllocator::new(Answer::FirstPerTti(7));
    let mut tally = ShareTally::new();
    let mut cursor = Cursor::default();

    for _ in 0..100 {
        alloc.next_tti();
        let out = weighted_round_robin(&roster, cursor, &mut alloc);
        tally.record(&out);
        cursor = out.next_cursor;
    }

    assert_eq!((tally.grants(0), tally.grants(1), tally.grants(2)), (100, 200, 400));
}

#[test]
fn contention_keeps_start_anchored() {
    let roster = roster_124();
    let mut alloc = MockAllocator::new(Answer::FirstPerTti(3));
    let mut tally = ShareTally::new();
    let mut cursor = Cursor::default();

    for _ in 0..300 {
        alloc.next_tti();
        let out = weighted_round_robin(&roster, cursor, &mut alloc);

        // The budget never changes how many attempts are made.
        assert_eq!(out.attempts, 7);
        assert_eq!(out.grants, 3);

        // A grant early in the pass carries the cursor past every UE touched
        // afterwards, which wraps an all-eligible roster back to its start.
        assert_eq!(out.next_cursor, cursor);

        tally.record(&out);
        cursor = out.next_cursor;
    }

    let (g0, g1, g2) = (tally.grants(0), tally.grants(1), tally.grants(2));
    assert_eq!((g0, g1, g2), (300, 600, 0));
    assert_eq!(tally.get(2).attempts, 1200);
}

#[test]
fn zero_grant_candidate_after_a_grant_moves_cursor() -> anyhow::Result<()> {
    let script = vec![true, false, false, false, false, false, false];
    let mut alloc = MockAllocator::new(Answer::Script(script));
    let out = schedule(&roster_124(), Cursor::new(0), Some(&mut alloc))?;

    assert_eq!(out.grants, 1);
    assert_eq!(out.next_cursor, Cursor::new(0));
    Ok(())
}

#[test]
fn cursor_lands_after_last_eligible_visited() {
    let mut roster: Vec<Candidate> = (0..4).map(|id| Candidate::active(id, 1)).collect();
    roster[3].active = false;
    let mut alloc = MockAllocator::new(Answer::FirstPerTti(1));

    alloc.next_tti();
    let out = weighted_round_robin(&roster, Cursor::default(), &mut alloc);
    assert_eq!(alloc.calls, vec![0, 1, 2]);
    assert_eq!(out.next_cursor, Cursor::new(3));

    // UE3 comes back and is the first one offered on the next TTI.
    roster[3].active = true;
    alloc.next_tti();
    let out = weighted_round_robin(&roster, out.next_cursor, &mut alloc);
    assert_eq!(alloc.calls, vec![3, 0, 1, 2]);
    assert_eq!(out.served[0].grants, 1);
    assert_eq!(out.next_cursor, Cursor::new(3));
}

#[test]
fn single_ue_with_wild_cursor() -> anyhow::Result<()> {
    let roster = vec![Candidate::active(9, 3)];

    for raw in [i64::MIN, -7, -1, 1, 1_000_000, i64::MAX] {
        let mut alloc = MockAllocator::always_succeeds();
        let out = schedule(&roster, Cursor::new(raw), Some(&mut alloc))?;

        assert_eq!(alloc.calls_for(9), 3);
        assert_eq!(out.next_cursor, Cursor::new(0));
    }
    Ok(())
}

#[test]
fn missing_allocator_fails_fast() {
    assert!(schedule(&roster_124(), Cursor::new(0), None).is_err());
}

fn arb_roster() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec((0u8..=8, any::<bool>()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (weight, active))| Candidate::new(i as UeId, weight, active))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]
    #[test]
    fn pass_invariants(
        roster in arb_roster(),
        raw in any::<i64>(),
        script in prop::collection::vec(any::<bool>(), 0..80),
    ) {
        let n = roster.len();
        let cursor = Cursor::new(raw);
        let mut alloc = MockAllocator::new(Answer::Script(script));
        let out = weighted_round_robin(&roster, cursor, &mut alloc);

        // --- INVARIANT 1: exactly sum of eligible weights attempts ---
        let expected: usize = roster
            .iter()
            .filter(|c| c.active && c.weight > 0)
            .map(|c| c.weight as usize)
            .sum();
        prop_assert_eq!(out.attempts, expected);
        prop_assert_eq!(alloc.calls.len(), expected);

        // --- INVARIANT 2: ineligible UEs are never offered ---
        for id in &alloc.calls {
            let c = roster[*id as usize];
            prop_assert!(c.active && c.weight > 0);
        }

        // --- INVARIANT 3: cursor stays in range ---
        prop_assert!(out.next_cursor.raw() >= 0);
        prop_assert!(out.next_cursor.raw() as usize <= n.saturating_sub(1));

        // --- INVARIANT 4: any grant => cursor lands past the last eligible UE visited ---
        match out.served.last() {
            Some(last) if out.any_grant() => {
                prop_assert_eq!(out.next_cursor, Cursor::from((last.ue_id as usize + 1) % n));
            }
            _ => {
                prop_assert_eq!(out.next_cursor, cursor.normalized(n));
            }
        }

        // --- INVARIANT 5: visitation is circular from the cursor ---
        if let Some(first) = alloc.calls.first() {
            let start = cursor.normalize(n);
            let first_eligible = (0..n)
                .map(|k| (start + k) % n)
                .find(|&p| roster[p].active && roster[p].weight > 0);
            prop_assert_eq!(Some(*first as usize), first_eligible);
        }
    }
}
