use super::*;

#[test]
fn plain_commands_parse_case_insensitively() {
    assert_eq!("next".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Next));
    assert_eq!("  PREV ".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Prev));
    assert_eq!("play".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Play));
    assert_eq!("Mute".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Mute));
    assert_eq!("click".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Click));
    assert_eq!("help".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Help));
    assert_eq!("quit".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Quit));
}

#[test]
fn page_numbers_are_typed_from_one() {
    assert_eq!("page 1".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Page(0)));
    assert_eq!("page 3".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Page(2)));
    assert_eq!(
        "page 0".parse::<ShowcaseCommand>(),
        Err(CommandError::PageZero)
    );
    assert_eq!(
        "page".parse::<ShowcaseCommand>(),
        Err(CommandError::MissingArgument("page"))
    );
    assert_eq!(
        "page two".parse::<ShowcaseCommand>(),
        Err(CommandError::NotANumber {
            command: "page",
            value: "two".into()
        })
    );
}

#[test]
fn volume_is_clamped_to_the_valid_range() {
    assert_eq!("volume 30".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Volume(30)));
    assert_eq!("volume 250".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Volume(100)));
    assert_eq!("volume -5".parse::<ShowcaseCommand>(), Ok(ShowcaseCommand::Volume(0)));
}

#[test]
fn unknown_words_are_reported_not_fatal() {
    let err = "dance".parse::<ShowcaseCommand>().expect_err("unknown");
    assert_eq!(err, CommandError::Unknown("dance".into()));
    assert!(err.to_string().contains("help"));
}
