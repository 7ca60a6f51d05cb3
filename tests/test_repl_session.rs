//! Integration tests for the interactive session.
//!
//! Each test feeds a scripted conversation into the session loop and
//! compares the full transcript, prompts included, against the expected
//! output.

use chrono::{Datelike, Local};
use rolodex::{repl, Config};
use std::io::Cursor;

fn transcript(input: &str) -> String {
    let config = Config::default();
    let mut output = Vec::new();
    repl::run(&config, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Test a full conversation covering every contact command.
///
/// This test validates:
/// - Contacts are created, extended, edited, listed, and deleted
/// - Each command gets exactly the reply the bot promises
/// - The listing keeps contacts in the order they were added
#[test]
fn test_full_contact_conversation() {
    let input = "\
hello
add John 1234567890
add John 5555555555
phone John
change John 5555555555 1112223333
add Jane 0987654321
add-birthday Jane 24.04.1990
show-birthday Jane
show-birthday John
all
delete John
all
exit
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: How can I help you?
Enter a command: Contact added.
Enter a command: Contact updated.
Enter a command: Contact name: John, phones: 1234567890; 5555555555, birthday: not set
Enter a command: Contact updated.
Enter a command: Contact added.
Enter a command: Birthday added.
Enter a command: 24.04.1990
Enter a command: Birthday not set.
Enter a command: Contact name: John, phones: 1234567890; 1112223333, birthday: not set
Contact name: Jane, phones: 0987654321, birthday: 24.04.1990
Enter a command: Contact deleted.
Enter a command: Contact name: Jane, phones: 0987654321, birthday: 24.04.1990
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

/// Test the three fixed error sentences.
///
/// This test validates:
/// - Missing arguments answer with the argument sentence
/// - Invalid values answer with the validation sentence
/// - Failed lookups answer with the not-exist sentence
/// - None of these end the session
#[test]
fn test_error_sentences() {
    let input = "\
add
add John 123
phone John
change John 1112223333 2223334444
unknowncmd
add John 1234567890
change John 9999999999 1112223333
add-birthday John 31.13.2000
show-birthday
exit
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: Enter the argument for the command.
Enter a command: Give me name and phone number please.
Enter a command: Contact not exist.
Enter a command: Contact not exist.
Enter a command: Invalid command.
Enter a command: Contact added.
Enter a command: Contact not exist.
Enter a command: Give me name and phone number please.
Enter a command: Enter the argument for the command.
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

/// Test that a rejected phone leaves no half-created contact behind.
#[test]
fn test_rejected_add_leaves_book_empty() {
    let input = "\
add John 123
all
exit
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: Give me name and phone number please.
Enter a command: There are no contacts in the address book.
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

#[test]
fn test_keywords_are_case_insensitive_but_names_are_not() {
    let input = "\
ADD John 1234567890
phone john
PHONE John
Close
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: Contact added.
Enter a command: Contact not exist.
Enter a command: Contact name: John, phones: 1234567890, birthday: not set
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

#[test]
fn test_blank_lines_and_stray_whitespace_are_tolerated() {
    let input = "
   add   John   1234567890
\t
exit
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: Enter a command: Contact added.
Enter a command: Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

#[test]
fn test_end_of_input_closes_the_session() {
    let input = "add John 1234567890\n";

    let expected = "\
Welcome to the assistant bot!
Enter a command: Contact added.
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

#[test]
fn test_birthdays_on_an_empty_book() {
    let input = "\
birthdays
exit
";

    let expected = "\
Welcome to the assistant bot!
Enter a command: No upcoming birthdays.
Enter a command: Good bye!
";

    assert_eq!(transcript(input), expected);
}

/// Test the `birthdays` command with a birthday falling today.
///
/// Today's date shifts under the test, so this asserts the reply's shape
/// rather than the exact transcript.
#[test]
fn test_birthdays_lists_a_birthday_happening_today() {
    // 1992 is a leap year, so the date parses even on February 29th
    let today = Local::now().date_naive();
    let input = format!(
        "add John 1234567890\nadd-birthday John {:02}.{:02}.1992\nbirthdays\nexit\n",
        today.day(),
        today.month()
    );

    let output = transcript(&input);
    let reply = output
        .lines()
        .find_map(|line| line.strip_prefix("Enter a command: John: "))
        .expect("birthdays reply should list John");

    // DD.MM.YYYY
    assert_eq!(reply.len(), 10);
    assert_eq!(&reply[2..3], ".");
    assert_eq!(&reply[5..6], ".");
}
