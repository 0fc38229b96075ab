//! Host collaborators implemented over JNI
//!
//! The runtime calls these from its own threads, which the JVM has never seen,
//! so each call attaches the thread and works inside a local frame. App classes
//! are resolved once at init on a Java thread: `FindClass` from an attached
//! native thread only sees the system class loader.
use anyhow::{Context, Result};
use jni::{
    JNIEnv, JavaVM,
    objects::{GlobalRef, JClass, JObject, JObjectArray, JString, JValue},
};

use zalith_bridge::{Clipboard, CursorMode, CursorShape, StateListener, UrlOpener};

const BRIDGE_STATES_CLASS: &str = "com/movtery/zalithlauncher/bridge/ZLBridgeStates";
const CURSOR_SHAPE_CLASS: &str = "com/movtery/zalithlauncher/bridge/CursorShape";
const NATIVE_INVOKER_CLASS: &str = "com/movtery/zalithlauncher/bridge/ZLNativeInvoker";
const CLIP_LABEL: &str = "ZalithLauncher";
const MIMETYPE_TEXT_PLAIN: &str = "text/plain";

pub struct JniHost {
    jvm: JavaVM,
    /// Application context, for the clipboard service
    context: GlobalRef,
    bridge_states: GlobalRef,
    cursor_shape: GlobalRef,
    native_invoker: GlobalRef,
}

impl JniHost {
    /// Must run on a Java thread so the app class loader is in scope.
    pub fn new(env: &mut JNIEnv, context: &JObject) -> Result<Self> {
        let jvm = env.get_java_vm().context("get JavaVM")?;
        let context = env.new_global_ref(context).context("global ref to context")?;
        let bridge_states = global_class(env, BRIDGE_STATES_CLASS)?;
        let cursor_shape = global_class(env, CURSOR_SHAPE_CLASS)?;
        let native_invoker = global_class(env, NATIVE_INVOKER_CLASS)?;
        Ok(Self {
            jvm,
            context,
            bridge_states,
            cursor_shape,
            native_invoker,
        })
    }

    /// Run `f` on an attached env inside a local reference frame.
    ///
    /// Pending Java exceptions are logged and cleared so the next call starts
    /// clean.
    fn with_env<T>(&self, what: &str, f: impl FnOnce(&mut JNIEnv) -> Result<T>) -> Option<T> {
        let mut env = match self.jvm.attach_current_thread_permanently() {
            Ok(env) => env,
            Err(e) => {
                log::error!("{}: failed to attach thread: {:?}", what, e);
                return None;
            }
        };

        let result = env.with_local_frame(16, f);
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                if env.exception_check().unwrap_or(false) {
                    let _ = env.exception_describe();
                    let _ = env.exception_clear();
                }
                log::error!("{}: {:#}", what, e);
                None
            }
        }
    }

    fn clipboard_manager<'local>(&self, env: &mut JNIEnv<'local>) -> Result<JObject<'local>> {
        let service = env.new_string("clipboard")?;
        let manager = env
            .call_method(
                self.context.as_obj(),
                "getSystemService",
                "(Ljava/lang/String;)Ljava/lang/Object;",
                &[JValue::from(&service)],
            )?
            .l()?;
        anyhow::ensure!(!manager.is_null(), "no clipboard service");
        Ok(manager)
    }
}

fn global_class(env: &mut JNIEnv, name: &str) -> Result<GlobalRef> {
    let class = env
        .find_class(name)
        .with_context(|| format!("find class {}", name))?;
    env.new_global_ref(class)
        .with_context(|| format!("global ref to {}", name))
}

impl Clipboard for JniHost {
    fn set_text(&self, text: &str) {
        self.with_env("clipboard copy", |env| {
            let manager = self.clipboard_manager(env)?;
            let label = env.new_string(CLIP_LABEL)?;
            let text = env.new_string(text)?;
            let clip = env
                .call_static_method(
                    "android/content/ClipData",
                    "newPlainText",
                    "(Ljava/lang/CharSequence;Ljava/lang/CharSequence;)Landroid/content/ClipData;",
                    &[JValue::from(&label), JValue::from(&text)],
                )?
                .l()?;
            env.call_method(
                &manager,
                "setPrimaryClip",
                "(Landroid/content/ClipData;)V",
                &[JValue::from(&clip)],
            )?;
            Ok(())
        });
    }

    fn text(&self) -> Option<String> {
        self.with_env("clipboard paste", |env| {
            let manager = self.clipboard_manager(env)?;
            if !env.call_method(&manager, "hasPrimaryClip", "()Z", &[])?.z()? {
                return Ok(None);
            }

            let description = env
                .call_method(
                    &manager,
                    "getPrimaryClipDescription",
                    "()Landroid/content/ClipDescription;",
                    &[],
                )?
                .l()?;
            let mime = env.new_string(MIMETYPE_TEXT_PLAIN)?;
            let is_text = !description.is_null()
                && env
                    .call_method(
                        &description,
                        "hasMimeType",
                        "(Ljava/lang/String;)Z",
                        &[JValue::from(&mime)],
                    )?
                    .z()?;
            if !is_text {
                return Ok(None);
            }

            let clip = env
                .call_method(&manager, "getPrimaryClip", "()Landroid/content/ClipData;", &[])?
                .l()?;
            if clip.is_null() {
                return Ok(None);
            }
            let item = env
                .call_method(
                    &clip,
                    "getItemAt",
                    "(I)Landroid/content/ClipData$Item;",
                    &[JValue::Int(0)],
                )?
                .l()?;
            let chars = env
                .call_method(&item, "getText", "()Ljava/lang/CharSequence;", &[])?
                .l()?;
            if chars.is_null() {
                return Ok(None);
            }
            let string = env
                .call_method(&chars, "toString", "()Ljava/lang/String;", &[])?
                .l()?;
            let string = JString::from(string);
            let text: String = env.get_string(&string)?.into();
            Ok(Some(text))
        })
        .flatten()
    }
}

impl UrlOpener for JniHost {
    fn open(&self, url: &str) {
        self.with_env("open link", |env| {
            let class: &JClass = self.native_invoker.as_obj().into();
            let link = env.new_string(url)?;
            env.call_static_method(
                class,
                "openLink",
                "(Ljava/lang/String;)V",
                &[JValue::from(&link)],
            )?;
            Ok(())
        });
    }
}

impl StateListener for JniHost {
    fn cursor_mode_changed(&self, mode: CursorMode) {
        self.with_env("cursor mode", |env| {
            let class: &JClass = self.bridge_states.as_obj().into();
            env.call_static_method(class, "setCursorMode", "(I)V", &[JValue::Int(mode as i32)])?;
            Ok(())
        });
    }

    fn cursor_shape_changed(&self, shape: CursorShape) {
        self.with_env("cursor shape", |env| {
            let shape_class: &JClass = self.cursor_shape.as_obj().into();
            let values = env
                .call_static_method(
                    shape_class,
                    "values",
                    &format!("()[L{};", CURSOR_SHAPE_CLASS),
                    &[],
                )?
                .l()?;
            let values = JObjectArray::from(values);
            let value = env.get_object_array_element(&values, shape.ordinal())?;

            let states_class: &JClass = self.bridge_states.as_obj().into();
            env.call_static_method(
                states_class,
                "setCursorShape",
                &format!("(L{};)V", CURSOR_SHAPE_CLASS),
                &[JValue::from(&value)],
            )?;
            Ok(())
        });
    }
}
