// ==========================================
// Pantry Labels - input file role classifiers
// ==========================================
// FilenameRoleClassifier: substring match on the file name
// HeaderRoleClassifier: header columns + first row
// ==========================================

use crate::config::{FilenameMarkers, RoleDetection};
use crate::domain::{FileRole, ListKind};
use crate::importer::field_mapper::{COL_CLIENT, COL_ROUTE_OR_TIME, GUEST_LIST_REQUIRED_COLUMNS};
use crate::importer::guest_list::GuestListClassifier;
use crate::importer::importer_trait::{FileProbe, RoleClassifier};

// ==========================================
// FilenameRoleClassifier
// ==========================================
// Markers are checked in order inventory, delivery, pickup.
#[derive(Debug, Clone)]
pub struct FilenameRoleClassifier {
    markers: FilenameMarkers,
}

impl FilenameRoleClassifier {
    pub fn new(markers: FilenameMarkers) -> Self {
        Self { markers }
    }
}

impl RoleClassifier for FilenameRoleClassifier {
    fn classify(&self, probe: &FileProbe<'_>) -> Option<FileRole> {
        let name = probe.file_name();
        if name.contains(&self.markers.inventory) {
            Some(FileRole::Inventory)
        } else if name.contains(&self.markers.delivery) {
            Some(FileRole::Delivery)
        } else if name.contains(&self.markers.pickup) {
            Some(FileRole::Pickup)
        } else {
            None
        }
    }

    fn reads_contents(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "filename"
    }
}

// ==========================================
// HeaderRoleClassifier
// ==========================================
// Client column -> inventory
// guest list columns -> delivery / pickup by the first row's kind
#[derive(Debug, Clone, Default)]
pub struct HeaderRoleClassifier;

impl RoleClassifier for HeaderRoleClassifier {
    fn classify(&self, probe: &FileProbe<'_>) -> Option<FileRole> {
        let has = |column: &str| probe.headers.iter().any(|h| h == column);

        if has(COL_CLIENT) {
            return Some(FileRole::Inventory);
        }

        if GUEST_LIST_REQUIRED_COLUMNS.iter().all(|c| has(c)) {
            let kind = probe
                .first_row
                .and_then(|row| row.get(COL_ROUTE_OR_TIME))
                .map(|v| GuestListClassifier::kind_of(v))
                .unwrap_or(ListKind::Delivery);
            return Some(match kind {
                ListKind::Delivery => FileRole::Delivery,
                ListKind::PickupWindow => FileRole::Pickup,
            });
        }

        None
    }

    fn name(&self) -> &'static str {
        "header"
    }
}

/// Classifier for the configured strategy.
pub fn classifier_for(
    strategy: RoleDetection,
    markers: &FilenameMarkers,
) -> Box<dyn RoleClassifier> {
    match strategy {
        RoleDetection::Filename => Box::new(FilenameRoleClassifier::new(markers.clone())),
        RoleDetection::Header => Box::new(HeaderRoleClassifier),
    }
}
