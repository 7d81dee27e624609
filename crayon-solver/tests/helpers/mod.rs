//! Helpers to run the `crayon-solver` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Files {
    pub(crate) instance_file: PathBuf,
    pub(crate) log_file: PathBuf,
    pub(crate) err_file: PathBuf,
}

impl Files {
    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.instance_file)?;
        std::fs::remove_file(self.log_file)?;
        std::fs::remove_file(self.err_file)?;

        Ok(())
    }
}

/// The result of running the solver on an instance.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// Writes `contents` to a fresh file called `file_name` in the temporary directory.
pub(crate) fn write_instance(file_name: &str, contents: &str) -> PathBuf {
    let directory = std::env::temp_dir().join(format!("crayon-tests-{}", std::process::id()));
    std::fs::create_dir_all(&directory).expect("Failed to create the instance directory.");

    let path = directory.join(file_name);
    std::fs::write(&path, contents).expect("Failed to write the instance file.");
    path
}

/// Writes the instance `contents` to `file_name`, runs the solver on it with the given arguments
/// and collects its output.
pub(crate) fn run_solver_on(file_name: &str, contents: &str, args: &[&str]) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = write_instance(file_name, contents);
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_crayon-solver"));

    let files = Files {
        log_file: PathBuf::from(format!("{}.log", instance_path.display())),
        err_file: PathBuf::from(format!("{}.err", instance_path.display())),
        instance_file: instance_path,
    };

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(&files.instance_file)
        .stdout(File::create(&files.log_file).expect("Failed to create log file."))
        .stderr(File::create(&files.err_file).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&files.log_file).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&files.err_file).expect("Failed to read error file.");
    files.cleanup().expect("Failed to clean up the test files.");

    Run {
        status,
        stdout,
        stderr,
    }
}
