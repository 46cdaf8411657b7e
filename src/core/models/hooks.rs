//! Redeploy webhook configuration

use serde::Serialize;

/// A hosting provider that accepts a redeploy webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookProvider {
    /// Render deploy hook
    Render,
    /// Netlify build hook
    Netlify,
    /// Vercel deploy hook
    Vercel,
}

impl HookProvider {
    /// Providers in the order their hooks are triggered
    pub const ALL: [Self; 3] = [Self::Render, Self::Netlify, Self::Vercel];

    /// Name used in report lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Render => "Render",
            Self::Netlify => "Netlify",
            Self::Vercel => "Vercel",
        }
    }

    /// Environment value consulted when the secrets file has no hook
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Render => "RENDER_DEPLOY_HOOK",
            Self::Netlify => "NETLIFY_DEPLOY_HOOK",
            Self::Vercel => "VERCEL_DEPLOY_HOOK",
        }
    }
}

impl std::fmt::Display for HookProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Webhook URLs per provider; an empty string means "not configured"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployHooks {
    /// Render deploy hook URL
    pub render: String,
    /// Netlify build hook URL
    pub netlify: String,
    /// Vercel deploy hook URL
    pub vercel: String,
}

impl DeployHooks {
    /// Hook URL for a provider
    #[must_use]
    pub fn get(&self, provider: HookProvider) -> &str {
        match provider {
            HookProvider::Render => &self.render,
            HookProvider::Netlify => &self.netlify,
            HookProvider::Vercel => &self.vercel,
        }
    }

    /// Fill every empty hook from `fallback`, keeping hooks already set
    #[must_use]
    pub fn or_fallback(self, fallback: &Self) -> Self {
        let pick = |primary: String, provider| {
            if primary.is_empty() { fallback.get(provider).to_string() } else { primary }
        };
        Self {
            render: pick(self.render, HookProvider::Render),
            netlify: pick(self.netlify, HookProvider::Netlify),
            vercel: pick(self.vercel, HookProvider::Vercel),
        }
    }

    /// Configured hooks in trigger order
    pub fn configured(&self) -> impl Iterator<Item = (HookProvider, &str)> {
        HookProvider::ALL
            .into_iter()
            .map(move |p| (p, self.get(p)))
            .filter(|(_, url)| !url.is_empty())
    }
}
