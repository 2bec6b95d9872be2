use anyhow::anyhow;
use today_core::SnapshotSlot;

/// Browser `localStorage` entry under a fixed key.
pub struct LocalStorageSlot {
  key: &'static str
}

impl LocalStorageSlot {
  pub fn new(key: &'static str) -> Self {
    Self { key }
  }

  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
      .ok_or_else(|| anyhow!("no window"))?
      .local_storage()
      .map_err(|e| {
        anyhow!(
          "local storage unavailable: \
           {e:?}"
        )
      })?
      .ok_or_else(|| {
        anyhow!(
          "local storage disabled"
        )
      })
  }
}

impl SnapshotSlot for LocalStorageSlot {
  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(self.key)
      .map_err(|e| {
        anyhow!(
          "failed reading {}: {e:?}",
          self.key
        )
      })
  }

  fn write(
    &self,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(self.key, value)
      .map_err(|e| {
        anyhow!(
          "failed writing {}: {e:?}",
          self.key
        )
      })
  }
}
