pub fn get_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let sha = env!("VERGEN_GIT_SHA");

    // vergen falls back to this marker when no git repository is available.
    if sha == "VERGEN_IDEMPOTENT_OUTPUT" {
        version.to_string()
    } else {
        format!("{version} [`{sha}`]")
    }
}
