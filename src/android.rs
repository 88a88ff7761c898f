//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jstring, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;

use crate::{params_from_json, render_to_pdf, render_to_svg};

/// Render the diagram described by a JSON parameter object to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(paramsJson: String): String?
#[no_mangle]
pub extern "system" fn Java_app_fretlib_FretLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    params_json: JString,
) -> jstring {
    let json: String = match env.get_string(&params_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match params_from_json(&json).and_then(|p| render_to_svg(&p)) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render the diagram described by a JSON parameter object to a PDF file
/// at `path`.
///
/// Called from Kotlin as:
///   external fun renderPdfFile(paramsJson: String, path: String): Boolean
#[no_mangle]
pub extern "system" fn Java_app_fretlib_FretLib_renderPdfFile(
    mut env: JNIEnv,
    _class: JClass,
    params_json: JString,
    path: JString,
) -> jboolean {
    let json: String = match env.get_string(&params_json) {
        Ok(s) => s.into(),
        Err(_) => return JNI_FALSE,
    };
    let path_str: String = match env.get_string(&path) {
        Ok(s) => s.into(),
        Err(_) => return JNI_FALSE,
    };

    let result = params_from_json(&json).and_then(|p| render_to_pdf(&p)).and_then(|bytes| {
        std::fs::write(&path_str, bytes).map_err(|e| format!("Failed to write '{path_str}': {e}"))
    });

    match result {
        Ok(()) => JNI_TRUE,
        Err(_) => JNI_FALSE,
    }
}
