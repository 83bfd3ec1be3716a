use bord::cli::{internal_error, run, user_error, BordError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("BORD_LOG", "warn")).init();

    // No-op outside Windows consoles
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        match e.downcast_ref::<BordError>() {
            Some(err) => user_error(&err.to_string()),
            None => internal_error(&e),
        }
    }
}
