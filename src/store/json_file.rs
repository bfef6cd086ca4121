use std::path::{Path, PathBuf};

use super::{AppStore, StoreError};
use crate::domain::AppData;

/// One pretty-printed JSON file per key inside `dir`.
///
/// Writes go to `<key>.tmp` first and are renamed into place, so a crash
/// mid-write never leaves a truncated snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl AppStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<AppData>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, key: &str, data: &AppData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GymProfile;
    use crate::store::load_or_seed;

    #[test]
    fn missing_file_seeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("gym_app_data").unwrap().is_none());
        assert_eq!(load_or_seed(&store, "gym_app_data").unwrap(), AppData::seed());
    }

    #[test]
    fn saved_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = AppData::seed();
        data.profile = GymProfile {
            gym_name: "Alpha Fitness Zone".to_string(),
            ..GymProfile::default()
        };

        JsonFileStore::new(dir.path().join("nested")).save("gym_app_data", &data).unwrap();

        let reopened = JsonFileStore::new(dir.path().join("nested"));
        assert_eq!(reopened.load("gym_app_data").unwrap(), Some(data));
        assert!(!reopened.path_for("gym_app_data").with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path_for("gym_app_data"), "{not json").unwrap();
        assert!(matches!(store.load("gym_app_data"), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn reads_the_browser_snapshot_shape() {
        let raw = r#"{
            "members": {
                "mem_1717": {
                    "id": "mem_1717",
                    "memberId": "A24001",
                    "name": "Asha",
                    "phone": "+919811111111",
                    "email": "",
                    "joinDate": "2024-01-15T00:00:00.000Z",
                    "membershipExpiry": "2024-04-15T00:00:00.000Z",
                    "payments": [
                        { "id": "pay_1717", "date": "2024-01-15T00:00:00.000Z", "amount": 2700, "planId": "3m", "mode": "UPI" }
                    ],
                    "photoUrl": "data:image/png;base64,AAAA"
                }
            },
            "profile": { "gymName": "Alpha", "gymAddress": "", "email": "", "whatsappNumber": "",
                         "bankAccount": "", "ifscCode": "", "upiId": "alpha@upi" },
            "plans": [ { "id": "1m", "name": "1 Month", "durationMonths": 1, "price": 1000 } ]
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path_for("gym_app_data"), raw).unwrap();

        let data = store.load("gym_app_data").unwrap().unwrap();
        let member = data.member("mem_1717").unwrap();
        assert_eq!(member.member_code, "A24001");
        assert_eq!(member.email, None);
        assert_eq!(member.payments[0].mode, crate::domain::PaymentMode::Upi);
        assert_eq!(data.profile.upi_id, "alpha@upi");
        assert_eq!(data.plans.len(), 1);
    }
}
