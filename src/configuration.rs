#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub marketplace: MarketplaceSettings,
    pub email: Option<EmailSettings>,
}

#[derive(Clone, serde::Deserialize)]
pub struct MarketplaceSettings {
    pub base_url: String,
}

/// Mail relay credentials. When the block is absent from the configuration
/// file, the email notifier is simply not registered.
#[derive(Clone, serde::Deserialize)]
pub struct EmailSettings {
    pub api_url: String,
    pub api_key: String,
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    settings.set_default("marketplace.base_url", String::from("https://www.avito.ru/"))?;
    settings.merge(config::File::with_name("configuration").required(false))?;

    settings.try_into()
}
