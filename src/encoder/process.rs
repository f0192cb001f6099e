use std::fmt::Display;
use std::process::ExitStatus;

/// How an external process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    pub core_dumped: bool,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(unix)]
impl From<ExitStatus> for ProcessOutcome {
    fn from(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        Self {
            exit_code: status.code(),
            signal: status.signal(),
            core_dumped: status.core_dumped(),
        }
    }
}

#[cfg(not(unix))]
impl From<ExitStatus> for ProcessOutcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            signal: None,
            core_dumped: false,
        }
    }
}

impl Display for ProcessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.exit_code, self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(signal)) if self.core_dumped => {
                write!(f, "signal {signal} (core dumped)")
            }
            (None, Some(signal)) => write!(f, "signal {signal}"),
            (None, None) => write!(f, "unknown termination"),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn clean_exit() {
        let outcome = ProcessOutcome::from(ExitStatus::from_raw(0));
        assert!(outcome.success());
        assert_eq!(outcome.to_string(), "exit code 0");
    }

    #[test]
    fn non_zero_exit() {
        let outcome = ProcessOutcome::from(ExitStatus::from_raw(2 << 8));
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, Some(2));
        assert_eq!(outcome.signal, None);
    }

    #[test]
    fn killed_by_signal() {
        let outcome = ProcessOutcome::from(ExitStatus::from_raw(9));
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, None);
        assert_eq!(outcome.signal, Some(9));
        assert!(!outcome.core_dumped);
        assert_eq!(outcome.to_string(), "signal 9");
    }

    #[test]
    fn core_dump() {
        let outcome = ProcessOutcome::from(ExitStatus::from_raw(0x80 | 11));
        assert_eq!(outcome.signal, Some(11));
        assert!(outcome.core_dumped);
        assert_eq!(outcome.to_string(), "signal 11 (core dumped)");
    }
}
