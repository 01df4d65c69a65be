pub mod github_enterprise;
