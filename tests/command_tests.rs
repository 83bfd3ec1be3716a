use predicates::prelude::*;
use test_env::{data_path, get_bord_cmd, read_data, setup_test_env};

#[test]
fn test_no_command_lists_and_creates_data_file() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bord\n---\n"));

    let data = read_data(&temp_dir);
    assert_eq!(data["index"], 0);
    assert_eq!(data["tasks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_task_with_board_and_priority() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .args(["task", "@shopping", "milk", "p:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@shopping"))
        .stdout(predicate::str::contains("1 !  [ ] milk"))
        .stdout(predicate::str::contains("Completed Tasks: 0 | Pending: 1 | Total: 1"));

    let data = read_data(&temp_dir);
    assert_eq!(data["index"], 1);
    let task = &data["tasks"][0];
    assert_eq!(task["id"], 1);
    assert_eq!(task["board"], "shopping");
    assert_eq!(task["description"], "milk");
    assert_eq!(task["priority"], 2);
    assert_eq!(task["checked"], false);
}

#[test]
fn test_task_alias_defaults_to_tasks_board() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .args(["t", "water", "the", "plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@tasks"))
        .stdout(predicate::str::contains("1    [ ] water the plants"));
}

#[test]
fn test_check_moves_task_below_separator() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "@shopping", "milk", "p:2"]).assert().success();

    get_bord_cmd(&temp_dir)
        .args(["check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("---\n1 !  [X] milk"))
        .stdout(predicate::str::contains("Completed Tasks: 1 | Pending: 0 | Total: 1"));

    assert_eq!(read_data(&temp_dir)["tasks"][0]["checked"], true);
}

#[test]
fn test_move_ids_empties_source_board() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "@shopping", "milk"]).assert().success();
    get_bord_cmd(&temp_dir).args(["task", "@shopping", "bread"]).assert().success();
    get_bord_cmd(&temp_dir).args(["task", "@work", "report"]).assert().success();

    get_bord_cmd(&temp_dir)
        .args(["move", "1,2", "@work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@work"))
        .stdout(predicate::str::contains("@shopping").not());

    let data = read_data(&temp_dir);
    for task in data["tasks"].as_array().unwrap() {
        assert_eq!(task["board"], "work");
    }
}

#[test]
fn test_prioritize_without_priority_changes_nothing() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "@work", "report"]).assert().success();
    let before = read_data(&temp_dir);

    get_bord_cmd(&temp_dir).args(["prioritize", "@work"]).assert().success();
    assert_eq!(read_data(&temp_dir), before);

    get_bord_cmd(&temp_dir).args(["p", "@work", "p:3"]).assert().success();
    assert_eq!(read_data(&temp_dir)["tasks"][0]["priority"], 3);
}

#[test]
fn test_edit_and_delete() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "bred"]).assert().success();
    get_bord_cmd(&temp_dir).args(["task", "eggs"]).assert().success();

    get_bord_cmd(&temp_dir)
        .args(["edit", "1", "bread", "p:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 !! [ ] bread"));

    get_bord_cmd(&temp_dir)
        .args(["d", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bread").not());

    // IDs are never reused after a delete
    get_bord_cmd(&temp_dir).args(["task", "jam"]).assert().success();
    let data = read_data(&temp_dir);
    assert_eq!(data["index"], 3);
    let ids: Vec<i64> = data["tasks"].as_array().unwrap().iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_stale_ids_are_silently_ignored() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "milk"]).assert().success();

    for args in [["check", "42"], ["delete", "42"], ["edit", "42"], ["move", "@nowhere"]] {
        get_bord_cmd(&temp_dir)
            .args(args)
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
    assert_eq!(read_data(&temp_dir)["tasks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_help_exits_zero_without_saving() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bord Help"))
        .stdout(predicate::str::contains("(p)rioritize"));

    get_bord_cmd(&temp_dir).args(["task", "milk"]).assert().success();
    let before = read_data(&temp_dir);

    get_bord_cmd(&temp_dir)
        .args(["h", "task"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@tasks").not());
    assert_eq!(read_data(&temp_dir), before);
}

#[test]
fn test_unknown_command_exits_one() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).args(["task", "milk"]).assert().success();
    let before = read_data(&temp_dir);

    get_bord_cmd(&temp_dir)
        .args(["frobnicate", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command not recognized: frobnicate"))
        .stdout(predicate::str::contains("@tasks").not());
    assert_eq!(read_data(&temp_dir), before);
}

#[test]
fn test_hyphen_command_tokens_are_unrecognized() {
    let (temp_dir, _guard) = setup_test_env();

    for name in ["-x", "-h", "--help"] {
        get_bord_cmd(&temp_dir)
            .arg(name)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(format!("Command not recognized: {}", name)));
    }
}

#[test]
fn test_version_flag_in_command_slot() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    assert!(!data_path(&temp_dir).exists());
}

#[test]
fn test_flag_like_arguments_become_description() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir)
        .args(["t", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1    [ ] --version"));
    get_bord_cmd(&temp_dir).args(["t", "--", "x"]).assert().success();

    let data = read_data(&temp_dir);
    assert_eq!(data["tasks"][0]["description"], "--version");
    assert_eq!(data["tasks"][1]["description"], "-- x");
}

#[test]
fn test_help_does_not_create_data_file() {
    let (temp_dir, _guard) = setup_test_env();

    get_bord_cmd(&temp_dir).arg("h").assert().success();
    assert!(!data_path(&temp_dir).exists());
}

#[test]
fn test_help_ignores_malformed_data_file() {
    let (temp_dir, _guard) = setup_test_env();
    let path = data_path(&temp_dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    get_bord_cmd(&temp_dir)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bord Help"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_loads_data_file_with_text_priorities() {
    let (temp_dir, _guard) = setup_test_env();
    let path = data_path(&temp_dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"index":2,"tasks":[{"id":1,"board":"shopping","description":"milk","priority":"2","checked":false},{"id":2,"board":"shopping","description":"eggs","priority":["3"],"checked":false}]}"#,
    )
    .unwrap();

    get_bord_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 !! [ ] eggs\n1 !  [ ] milk"));

    let data = read_data(&temp_dir);
    assert_eq!(data["tasks"][0]["priority"], 2);
    assert_eq!(data["tasks"][1]["priority"], 3);
}
