//! # Example: demo
//!
//! Runs one long job under the supervisor, inspects it while it runs, then
//! cancels it and prints the retained log and result.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Supervisor::builder().build(), install_signal_handlers()
//!   ├─► admit("copy-tables")          → Running
//!   ├─► admit("another")              → Err(AlreadyRunning)
//!   ├─► sleep, status()               → Running, log so far
//!   ├─► cancel()                      → job observes token, returns Canceled
//!   ├─► completion.wait()             → Completed, last_error = Canceled
//!   └─► reset()                       → Idle
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example demo
//! ```

use std::time::Duration;

use jobvisor::{JobContext, JobError, JobFn, JobRef, Supervisor, SupervisorConfig};

fn copy_job(name: &'static str) -> JobRef {
    JobFn::arc(name, |ctx: JobContext| async move {
        let mut table = 0u32;
        loop {
            tokio::select! {
                _ = ctx.cancelled() => {
                    ctx.logger().warn(&format!("stopped after {table} tables"));
                    return Err::<(), JobError>(JobError::Canceled);
                }
                _ = tokio::time::sleep(Duration::from_millis(100)) => {
                    table += 1;
                    ctx.logger().info(&format!("copied table #{table}"));
                }
            }
        }
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sup = Supervisor::builder(SupervisorConfig::default()).build();
    sup.install_signal_handlers();

    let done = sup.admit_with_default_logger(copy_job("copy-tables"))?;
    if let Err(e) = sup.admit_with_default_logger(copy_job("another")) {
        println!("second admission rejected: {e}");
    }

    tokio::time::sleep(Duration::from_millis(350)).await;
    let status = sup.status();
    println!("status: {status}");
    print!("{}", status.log_text());

    sup.cancel();
    done.wait().await;

    let status = sup.status();
    println!("status: {status}");
    print!("{}", status.log_text());

    sup.reset()?;
    println!("status after reset: {}", sup.status());
    Ok(())
}
