use crate::error::{Error, Result};
use crate::loader::{LoadedTemplate, TemplateLoader};
use log::debug;
use url::Url;

/// Loader for templates from git repositories.
/// Repositories are shallow-cloned into a temporary directory.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<S: AsRef<str>> GitLoader<S> {
    /// Creates a new GitLoader instance.
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// Checks whether a string looks like a clonable git URL.
    pub fn is_git_url(s: &str) -> bool {
        if s.starts_with("git@") {
            return true;
        }
        match Url::parse(s) {
            Ok(url) => matches!(url.scheme(), "https" | "http" | "git" | "ssh"),
            Err(_) => false,
        }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Loads a template by cloning a git repository.
    ///
    /// # Errors
    /// * `Error::Git2Error` if clone fails
    /// * `Error::IoError` if the temporary directory cannot be created
    fn load(&self) -> Result<LoadedTemplate> {
        let repo_url = self.repo.as_ref();

        let checkout = tempfile::Builder::new()
            .prefix("stencil-")
            .tempdir()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;

        debug!("Cloning repository '{}' to '{}'.", repo_url, checkout.path().display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
            } else {
                git2::Cred::default()
            }
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);
        fetch_opts.depth(1);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, checkout.path())?;

        Ok(LoadedTemplate::checkout(checkout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_git_url() {
        assert!(GitLoader::<&str>::is_git_url("https://github.com/user/repo.git"));
        assert!(GitLoader::<&str>::is_git_url("git://example.com/repo"));
        assert!(GitLoader::<&str>::is_git_url("ssh://git@example.com/repo.git"));
        assert!(GitLoader::<&str>::is_git_url("git@github.com:user/repo.git"));
        assert!(!GitLoader::<&str>::is_git_url("./templates/app"));
        assert!(!GitLoader::<&str>::is_git_url("/abs/templates/app"));
    }
}
