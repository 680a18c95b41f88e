//! Propiedades que pueden revelar información personal del autor o del
//! dispositivo.

/// Nombres exactos tal como los emiten los lectores de cada formato.
pub const SENSITIVE_PROPERTIES: [&str; 45] = [
    "Author",
    "Creator",
    "Producer",
    "UserComment",
    "Software",
    "Make",
    "Model",
    "Artist",
    "Copyright",
    "CameraOwnerName",
    "GPSInfo",
    "GPSLatitude",
    "GPSLongitude",
    "GPSAltitude",
    "GPSTimeStamp",
    "GPSDateStamp",
    "GPSLatitudeRef",
    "GPSLongitudeRef",
    "GPSAltitudeRef",
    "GPSProcessingMethod",
    "GPSSpeed",
    "GPSSpeedRef",
    "GPSImgDirection",
    "GPSImgDirectionRef",
    "GPSMapDatum",
    "GPSDestLatitude",
    "GPSDestLongitude",
    "GPSDestBearing",
    "GPSDestDistance",
    "GPSDestLatitudeRef",
    "GPSDestLongitudeRef",
    "GPSDestBearingRef",
    "GPSDestDistanceRef",
    "GPSDifferential",
    "GPSAreaInformation",
    "GPSDate",
    "GPSDOP",
    "GPSMeasureMode",
    "GPSPitch",
    "GPSRoll",
    "GPSSatellites",
    "GPSStatus",
    "GPSTrack",
    "GPSTrackRef",
    "GPSVersionID",
];

/// Comparación exacta: `author` o `GPS` no cuentan como sensibles.
pub fn is_sensitive(key: &str) -> bool {
    SENSITIVE_PROPERTIES.contains(&key)
}
