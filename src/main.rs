use stagehand::bitrix::StageError;
use stagehand::cli::{internal_error, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // Unreachable webhook, unreadable reply or config file
        let internal = e.chain().any(|cause| {
            cause.downcast_ref::<StageError>().is_some_and(StageError::is_internal)
        });
        if internal {
            let mut message = e.to_string();
            let mut causes = e.chain().skip(1).peekable();
            if causes.peek().is_some() {
                message.push_str("\n\nCaused by:");
                for (indent, cause) in causes.enumerate() {
                    message.push_str(&format!("\n{:indent$}  {}", "", cause, indent = indent + 1));
                }
            }
            internal_error(&message);
        } else {
            // User error
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
