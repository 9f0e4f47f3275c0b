//! Sends one message of each severity, then watches and unwatches the
//! current process.
//!
//! Expects a watchdog service on `127.0.0.1:3004` accepting the key
//! `set-some-key`.

use std::process::ExitCode;

use server_watchdog::{ClientError, ClientOptions, ServerWatchdogClient};

fn run(client: &ServerWatchdogClient) -> Result<(), ClientError> {
    let channel = client.default_channel();

    println!("Sending an error message thru channel '{channel}'...");
    client.error("This is a sample error message from the Server Watchdog demo", "")?;

    println!("Sending a warning message thru channel '{channel}'...");
    client.warn("This is a sample warning message from the Server Watchdog demo", "")?;

    println!("Sending an information message thru channel '{channel}'...");
    client.info("This is a sample information message from the Server Watchdog demo", "")?;

    println!("Start monitoring ourselves thru channel '{channel}'...");
    client.process_watch(0, "Server Watchdog Rust Demo", "", "")?;

    println!("Stop monitoring ourselves on channel '{channel}'...");
    client.process_unwatch(0, "")?;

    Ok(())
}

fn main() -> ExitCode {
    let options = ClientOptions::new("127.0.0.1", 3004, "set-some-key", "default");
    let client = match ServerWatchdogClient::create(options) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error creating client [{err}]");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&client) {
        eprintln!("Error sending message [{err}]");
        return ExitCode::FAILURE;
    }
    println!("Done!");
    ExitCode::SUCCESS
}
