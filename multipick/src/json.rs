// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widgets over JSON option records.

use alloc::sync::Arc;

use multipick_options::{FieldConfig, JsonFields};
use multipick_overlay::SharedOverlayManager;
use serde_json::Value;

use crate::{ConfigError, MultiSelect, MultiSelectConfig};

impl MultiSelect<Value, JsonFields> {
    /// Creates a widget over `options`, a JSON array read through `fields`.
    ///
    /// Fails when the configuration is invalid, when `fields` names a group
    /// label without a children field, or when `options` (or a group's
    /// children) is not an array.
    pub fn from_json(
        fields: FieldConfig,
        options: Value,
        config: MultiSelectConfig,
        manager: SharedOverlayManager,
    ) -> Result<Self, ConfigError> {
        let source = fields.source(options)?;
        Ok(Self::new(JsonFields::new(fields), config, manager)?.with_options(Arc::new(source)))
    }
}
