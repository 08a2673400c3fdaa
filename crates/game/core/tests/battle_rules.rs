use duel_core::{
    Attack, AttackOutcome, BattleConfig, Creature, CreatureTemplate, Match, Participant, Roster,
    Side, perform_attack,
};

fn template(name: &str, hp: u32, stamina: u32) -> CreatureTemplate {
    CreatureTemplate::new(
        name,
        hp,
        stamina,
        "water",
        vec![
            Attack::new("Pistolet a O", 30, "water", 40),
            Attack::new("Charge", 20, "normal", 30),
            Attack::new("Ecume", 40, "water", 40),
            Attack::new("Morsure", 30, "normal", 10),
        ],
    )
    .unwrap()
}

fn creature(hp: u32, stamina: u32) -> Creature {
    template("Carapuce", hp, stamina.max(1))
        .instantiate()
        .with_stamina(stamina)
}

#[test]
fn rested_attacker_deals_full_damage_and_pays_energy() {
    let config = BattleConfig::default();
    let mut attacker = creature(100, 50);
    let mut target = creature(100, 50);

    perform_attack(&mut attacker, &mut target, 0, &config).unwrap();

    assert_eq!(target.health(), 70);
    assert_eq!(attacker.stamina(), 10);
}

#[test]
fn exhausted_attacker_deals_half_and_takes_full_recoil() {
    let config = BattleConfig::default();
    let mut attacker = creature(20, 0);
    let mut target = creature(100, 50);

    perform_attack(&mut attacker, &mut target, 3, &config).unwrap();

    assert_eq!(target.health(), 85);
    assert_eq!(attacker.health(), 0);
    assert!(attacker.is_fainted());
}

#[test]
fn fresh_instance_reads_back_its_maximums() {
    let roster = Roster::new(vec![template("Carapuce", 500, 500), template("Evolie", 420, 380)])
        .unwrap();

    for t in roster.iter() {
        let creature = t.instantiate();
        assert_eq!(creature.health(), creature.max_health());
        assert_eq!(creature.stamina(), creature.max_stamina());
        assert_eq!(creature.max_health(), t.max_health());
        assert_eq!(creature.max_stamina(), t.max_stamina());
    }
}

#[test]
fn advancing_twice_returns_to_the_same_side() {
    let roster = Roster::new(vec![template("Carapuce", 500, 500)]).unwrap();
    let mut battle = Match::new(
        Participant::new("Cc", roster.instantiate(0).unwrap()),
        Participant::new("ko", roster.instantiate(0).unwrap()),
    );

    let start = battle.active_side();
    battle.advance_turn();
    assert_ne!(battle.active_side(), start);
    battle.advance_turn();
    assert_eq!(battle.active_side(), start);
    assert_eq!(battle.turn(), 3);
}

#[test]
fn mirror_match_creatures_do_not_share_vitals() {
    let roster = Roster::new(vec![template("Carapuce", 500, 500)]).unwrap();
    let mut battle = Match::new(
        Participant::new("Cc", roster.instantiate(0).unwrap()),
        Participant::new("ko", roster.instantiate(0).unwrap()),
    );

    battle.take_turn(Side::First, 2).unwrap();

    assert_eq!(battle.participant(Side::First).creature.health(), 500);
    assert_eq!(battle.participant(Side::First).creature.stamina(), 460);
    assert_eq!(battle.participant(Side::Second).creature.health(), 460);
    assert_eq!(battle.participant(Side::Second).creature.stamina(), 500);
}

#[test]
fn self_inflicted_faint_keeps_the_counter() {
    let mut battle = Match::new(
        Participant::new("Cc", creature(20, 0)),
        Participant::new("ko", creature(100, 50)),
    );

    let report = battle.take_turn(Side::First, 3).unwrap();

    assert!(!report.advanced);
    assert_eq!(battle.turn(), 1);
}

#[test]
fn full_match_runs_until_someone_faints() {
    let roster = Roster::new(vec![template("Carapuce", 120, 200), template("Evolie", 100, 200)])
        .unwrap();
    let mut battle = Match::new(
        Participant::new("Cc", roster.instantiate_named("Carapuce").unwrap()),
        Participant::new("ko", roster.instantiate_named("Evolie").unwrap()),
    );

    let mut turns = 0;
    while battle.participants().iter().all(|p| !p.creature.is_fainted()) {
        let side = battle.active_side();
        let report = battle.take_turn(side, 2).unwrap();
        assert!(matches!(report.outcome, AttackOutcome::Resolved(_)));
        turns += 1;
        assert!(turns < 50, "match should end");
    }

    // Carapuce moves first and hits for 40 each time: 100 -> 60 -> 20 -> 0.
    assert!(battle.participant(Side::Second).creature.is_fainted());
    assert_eq!(battle.participant(Side::First).creature.health(), 40);
    assert_eq!(turns, 5);
}
