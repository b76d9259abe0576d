mod common;

use common::{kill, user_info, INIT_GAME, SEPARATOR, SHUTDOWN};
use gamefold::{classify, ClassifyError, Event, WORLD_PLAYER_ID};

#[test]
fn test_init_game_is_new_game() {
    assert_eq!(classify(INIT_GAME).unwrap(), Event::NewGame);
    assert_eq!(classify("some InitGame text").unwrap(), Event::NewGame);
}

#[test]
fn test_init_game_wins_over_other_markers() {
    let line = r"  0:00 InitGame: \g_motd\ Kill: ClientUserinfoChanged";
    assert_eq!(classify(line).unwrap(), Event::NewGame);
}

#[test]
fn test_user_info() {
    let event = classify(&user_info(2, "Isgalamido")).unwrap();
    assert_eq!(
        event,
        Event::PlayerInfoChanged {
            id: 2,
            name: "Isgalamido".to_string()
        }
    );
}

#[test]
fn test_user_info_name_with_spaces() {
    let event = classify(&user_info(4, "Dono da Bola")).unwrap();
    assert_eq!(
        event,
        Event::PlayerInfoChanged {
            id: 4,
            name: "Dono da Bola".to_string()
        }
    );
}

#[test]
fn test_user_info_without_timestamp_is_error() {
    let line = r" ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\sarge";
    assert!(matches!(
        classify(line),
        Err(ClassifyError::MalformedUserInfo { .. })
    ));
}

#[test]
fn test_user_info_non_numeric_id_is_error() {
    let line = r"20:34 ClientUserinfoChanged: a n\Isgalamido\t\0\model\sarge";
    assert!(matches!(
        classify(line),
        Err(ClassifyError::MalformedUserInfo { .. })
    ));
}

#[test]
fn test_user_info_without_name_field_is_error() {
    for line in [
        r"20:34 ClientUserinfoChanged: 2 t\0\model\sarge",
        r"20:34 ClientUserinfoChanged: 2 n\Isgalamido",
        r"20:34 ClientUserinfoChanged: 2 n\\t\0",
        "20:34 ClientUserinfoChanged: 2",
    ] {
        assert!(classify(line).is_err(), "expected error for {line:?}");
    }
}

#[test]
fn test_user_info_marker_without_colon_is_error() {
    let line = "20:34 ClientUserinfoChanged";
    assert!(classify(line).is_err());
}

#[test]
fn test_kill_between_players() {
    let event = classify(" 22:06 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH").unwrap();
    assert_eq!(
        event,
        Event::KillOccurred {
            killer: 2,
            killed: 3,
            cause: "MOD_ROCKET_SPLASH".to_string()
        }
    );
}

#[test]
fn test_kill_by_world() {
    let event = classify("20:54 Kill: 1022 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT").unwrap();
    assert_eq!(
        event,
        Event::KillOccurred {
            killer: WORLD_PLAYER_ID,
            killed: 2,
            cause: "MOD_TRIGGER_HURT".to_string()
        }
    );
}

#[test]
fn test_kill_names_with_spaces() {
    let event =
        classify("  2:11 Kill: 2 4 6: Dono da Bola killed Assasinu Credi by MOD_ROCKET").unwrap();
    assert_eq!(
        event,
        Event::KillOccurred {
            killer: 2,
            killed: 4,
            cause: "MOD_ROCKET".to_string()
        }
    );
}

#[test]
fn test_kill_without_timestamp_is_error() {
    let line = " Kill: 1022 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT";
    assert!(matches!(
        classify(line),
        Err(ClassifyError::MalformedKill { .. })
    ));
}

#[test]
fn test_kill_non_numeric_ids_are_errors() {
    for line in [
        "20:54 Kill: a 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT",
        "20:54 Kill: 1022 a 19: <world> killed Isgalamido by MOD_TRIGGER_HURT",
        "20:54 Kill: 1022 2 x: <world> killed Isgalamido by MOD_TRIGGER_HURT",
        "20:54 Kill: +1 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT",
    ] {
        assert!(
            matches!(classify(line), Err(ClassifyError::MalformedKill { .. })),
            "expected malformed kill for {line:?}"
        );
    }
}

#[test]
fn test_kill_without_cause_is_error() {
    for line in [
        "20:54 Kill: 1022 2 19: <world> killed Isgalamido",
        "20:54 Kill: 1022 2 19: <world> killed Isgalamido by ",
        "20:54 Kill: 1022 2 19: nobody by MOD_TRIGGER_HURT",
    ] {
        assert!(classify(line).is_err(), "expected error for {line:?}");
    }
}

#[test]
fn test_kill_id_overflow() {
    let line = "20:54 Kill: 99999999999 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT";
    assert_eq!(
        classify(line),
        Err(ClassifyError::PlayerIdOutOfRange {
            id: "99999999999".to_string(),
            line: line.to_string()
        })
    );
}

#[test]
fn test_error_message_names_the_line() {
    let line = " Kill: broken";
    let err = classify(line).unwrap_err();
    assert_eq!(err.to_string(), format!("malformed kill line: {line}"));
}

#[test]
fn test_unrecognized_lines() {
    for line in [
        SEPARATOR,
        SHUTDOWN,
        "",
        " 20:37 ClientConnect: 2",
        " 21:07 Item: 2 weapon_rocketlauncher",
        " 1:26 Killed: nothing",
    ] {
        assert_eq!(classify(line).unwrap(), Event::Unrecognized, "{line:?}");
    }
}

#[test]
fn test_helper_lines_classify() {
    assert!(matches!(
        classify(&kill(3, 2, "MOD_SHOTGUN")).unwrap(),
        Event::KillOccurred { killer: 3, killed: 2, .. }
    ));
}
