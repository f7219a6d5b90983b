use clap::Subcommand;
use focusweave_core::Preferences;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show current preferences
    Show,
    /// Set a preference value by key
    Set {
        /// Preference key (e.g. "max_daily_focus", "working_start")
        key: String,
        /// New value; lists as JSON (e.g. '["Mon","Tue"]')
        value: String,
    },
    /// Print the preferences file path
    Path,
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PrefsAction::Show => {
            let prefs = Preferences::load_or_default();
            println!("{}", toml::to_string_pretty(&prefs)?);
        }
        PrefsAction::Set { key, value } => {
            let prefs = Preferences::load_or_default();
            let updated = set_by_key(&prefs, &key, &value)?;
            updated.validate()?;
            updated.save()?;
            println!("{key} updated");
        }
        PrefsAction::Path => {
            println!("{}", focusweave_core::prefs::data_dir()?.join("prefs.toml").display());
        }
    }
    Ok(())
}

/// Set a flat preference field by name, parsing the value against the
/// field's existing JSON type.
fn set_by_key(
    prefs: &Preferences,
    key: &str,
    value: &str,
) -> Result<Preferences, Box<dyn std::error::Error>> {
    let mut json = serde_json::to_value(prefs)?;
    let obj = json.as_object_mut().ok_or("preferences are not an object")?;
    let existing = obj.get(key).ok_or_else(|| format!("unknown preference key: {key}"))?;

    let new_value = match existing {
        serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
        serde_json::Value::Number(_) => {
            let n: i64 = value.parse().map_err(|_| format!("cannot parse '{value}' as number"))?;
            serde_json::Value::Number(n.into())
        }
        serde_json::Value::Array(_) => serde_json::from_str(value)?,
        _ => serde_json::Value::String(value.into()),
    };

    obj.insert(key.to_string(), new_value);
    Ok(serde_json::from_value(json)?)
}
