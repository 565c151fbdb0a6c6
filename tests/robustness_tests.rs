use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

fn rentaldesk() -> Command {
    let mut cmd = Command::new(cargo_bin!("rentaldesk"));
    cmd.arg("--processing-delay-ms").arg("0");
    cmd
}

#[test]
fn test_non_numeric_rate() {
    rentaldesk()
        .write_stdin("Car\nABC123\nCivic\ntwenty\nAlice\nDL99\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input! Please enter the correct data type.",
        ))
        .stdout(predicate::str::contains("Enter customer name").not())
        .stdout(predicate::str::contains(
            "Thank you for using our rental system!",
        ));
}

#[test]
fn test_non_numeric_days() {
    rentaldesk()
        .write_stdin("Car\nABC123\nCivic\n20\nAlice\nDL99\nthree\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input! Please enter the correct data type.",
        ))
        .stdout(predicate::str::contains("Rental completed").not());
}

#[test]
fn test_non_positive_rate() {
    rentaldesk()
        .write_stdin("Car\nABC123\nCivic\n0\nAlice\nDL99\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Rate per day must be a positive number.",
        ))
        .stdout(predicate::str::contains("Enter customer name").not());
}

#[test]
fn test_truncated_input() {
    rentaldesk()
        .write_stdin("Car\nABC123\nCivic\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Input ended before all rental details were provided.",
        ))
        .stdout(predicate::str::contains(
            "Thank you for using our rental system!",
        ));
}

#[test]
fn test_empty_input() {
    rentaldesk()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for using our rental system!",
        ));
}

#[test]
fn test_digit_separators_in_rate() {
    rentaldesk()
        .write_stdin("Car\nABC123\nCivic\n2_0\nAlice\nDL99\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input! Please enter the correct data type.",
        ))
        .stdout(predicate::str::contains("Enter customer name").not());
}

#[test]
fn test_failed_session_is_logged() {
    rentaldesk()
        .env("RUST_LOG", "debug")
        .write_stdin("Truck\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "rental session ended without completing",
        ))
        .stdout(predicate::str::contains(
            "Thank you for using our rental system!",
        ));
}
