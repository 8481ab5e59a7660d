use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

struct Inputs {
    accounts: NamedTempFile,
    stock: NamedTempFile,
    requests: NamedTempFile,
}

/// A machine stocked with one 50 and three 20s, asked for 60.
fn non_canonical_inputs() -> Inputs {
    let mut accounts = NamedTempFile::new().unwrap();
    writeln!(accounts, "card, pin, balance, currency").unwrap();
    writeln!(accounts, "5123456789104444, 1234, 500, PLN").unwrap();

    let mut stock = NamedTempFile::new().unwrap();
    writeln!(stock, "currency, denomination, count").unwrap();
    writeln!(stock, "PLN, 50, 1").unwrap();
    writeln!(stock, "PLN, 20, 3").unwrap();

    let mut requests = NamedTempFile::new().unwrap();
    writeln!(requests, "card, pin, amount, currency").unwrap();
    writeln!(requests, "5123456789104444, 1234, 60, PLN").unwrap();

    Inputs {
        accounts,
        stock,
        requests,
    }
}

fn command(inputs: &Inputs) -> Command {
    let mut cmd = Command::new(cargo_bin!("cashpoint"));
    cmd.arg(inputs.requests.path())
        .arg("--accounts")
        .arg(inputs.accounts.path())
        .arg("--stock")
        .arg(inputs.stock.path())
        .env_remove("CASHPOINT_STRATEGY")
        .env_remove("CASHPOINT_CURRENCY");
    cmd
}

#[test]
fn test_greedy_is_the_default() {
    let inputs = non_canonical_inputs();

    command(&inputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("60,PLN,WRONG_AMOUNT,"));
}

#[test]
fn test_exact_strategy_flag() {
    let inputs = non_canonical_inputs();

    command(&inputs)
        .args(["--strategy", "exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60,PLN,ok,20x3"));
}

#[test]
fn test_strategy_from_environment() {
    let inputs = non_canonical_inputs();

    command(&inputs)
        .env("CASHPOINT_STRATEGY", "exact")
        .assert()
        .success()
        .stdout(predicate::str::contains("60,PLN,ok,20x3"));
}

#[test]
fn test_currency_from_environment() {
    let inputs = non_canonical_inputs();

    // The machine runs in EUR, so the PLN stock is refused and PLN requests
    // fail the currency check.
    command(&inputs)
        .env("CASHPOINT_CURRENCY", "EUR")
        .assert()
        .success()
        .stdout(predicate::str::contains("60,PLN,WRONG_CURRENCY,"));
}
