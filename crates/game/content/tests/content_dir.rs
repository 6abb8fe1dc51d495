use std::fs;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;
use usable_content::ContentFactory;
use usable_core::{
    AbilityFailure, Env, InvocationCore, InvocationOutcome, ItemContainer, SkillId, UseCommand,
};

const DATA_FILES: [&str; 5] = [
    "config.toml",
    "items.ron",
    "skills.ron",
    "effects.ron",
    "player.ron",
];

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn copy_data(target: &Path) {
    for file in DATA_FILES {
        fs::copy(data_dir().join(file), target.join(file)).unwrap();
    }
}

#[test]
fn loads_directory_like_embedded_content() {
    let dir = TempDir::new().unwrap();
    copy_data(dir.path());

    let loaded = ContentFactory::new(dir.path()).load_all().unwrap();
    let embedded = ContentFactory::embedded().unwrap();

    assert_eq!(loaded.config, embedded.config);
    assert_eq!(loaded.items, embedded.items);
    assert_eq!(loaded.player, embedded.player);
    assert_eq!(loaded.skills.len(), embedded.skills.len());
    assert_eq!(loaded.effects.len(), embedded.effects.len());
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    copy_data(dir.path());
    fs::remove_file(dir.path().join("skills.ron")).unwrap();

    let error = ContentFactory::new(dir.path()).load_all().unwrap_err();

    assert!(error.to_string().contains("skills.ron"));
}

#[test]
fn malformed_items_fail_to_load() {
    let dir = TempDir::new().unwrap();
    copy_data(dir.path());
    fs::write(dir.path().join("items.ron"), "(items: [(name: \"nameless\")])").unwrap();

    let error = ContentFactory::new(dir.path()).load_items().unwrap_err();

    assert!(error.to_string().contains("item catalog"));
}

#[test]
fn config_overrides_capacity() {
    let dir = TempDir::new().unwrap();
    copy_data(dir.path());
    fs::write(dir.path().join("config.toml"), "inventory_capacity = 3\n").unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(content.config.inventory_capacity, 3);
    assert!(
        content
            .player
            .spawn(None, &content.config, &content.items)
            .is_err()
    );
}

#[test]
fn embedded_items_drive_the_invocation_core() {
    let content = ContentFactory::embedded().unwrap();
    let (mut actor, mut inventory) = content
        .player
        .spawn(Some("Rend"), &content.config, &content.items)
        .unwrap();
    let core = InvocationCore::new(Env::new(&content.skills, &content.effects));
    let command = UseCommand::new(core);

    let wand = inventory.resolve("wand").unwrap();
    let report = command.execute("wand", &mut actor, &mut inventory);
    assert_eq!(report.messages, vec!["You used up a fire wand.".to_string()]);
    assert!(inventory.item(wand).is_none());
    assert_eq!(actor.resource("mana").unwrap().current, 12);

    // The staff shares the fireball cooldown started by the wand.
    let report = command.execute("staff", &mut actor, &mut inventory);
    assert_eq!(
        report.outcome,
        Some(InvocationOutcome::AbilityFailed(
            AbilityFailure::CooldownActive {
                skill_name: "Fireball".to_string(),
                remaining: Duration::from_secs(30),
            }
        ))
    );

    let report = command.execute("charm", &mut actor, &mut inventory);
    assert_eq!(report.messages, vec!["That skill is passive.".to_string()]);

    let report = command.execute("2.potion", &mut actor, &mut inventory);
    assert_eq!(report.messages, vec!["You used up a healing potion.".to_string()]);
    assert_eq!(inventory.len(), 8);

    let report = command.execute("amulet", &mut actor, &mut inventory);
    assert_eq!(report.messages, Vec::<String>::new());
    assert_eq!(actor.resource("stamina").unwrap().current, 5);
    assert!(
        actor
            .cooldown_remaining(&SkillId::new("second_wind"), Duration::ZERO)
            .is_some()
    );
    let vigor = actor.effects().iter().next().unwrap();
    assert_eq!(vigor.name, "Vigor");
}
