//! PAM authentication through a runtime-loaded libpam.
//!
//! The library is opened with `dlopen` so that a missing libpam is a
//! recoverable condition ([`AuthError::LibraryUnavailable`]) instead of a
//! link-time requirement.

use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::ptr;

use zeroize::Zeroizing;

use super::{AuthError, Authenticator};

const LIBRARY_NAMES: [&CStr; 2] = [c"libpam.so.0", c"libpam.so"];

const PAM_SUCCESS: c_int = 0;
const PAM_BUF_ERR: c_int = 5;
const PAM_CONV_ERR: c_int = 19;

const PAM_PROMPT_ECHO_OFF: c_int = 1;
const PAM_PROMPT_ECHO_ON: c_int = 2;
const PAM_ERROR_MSG: c_int = 3;
const PAM_TEXT_INFO: c_int = 4;

#[repr(C)]
struct PamMessage {
    msg_style: c_int,
    msg: *const c_char,
}

#[repr(C)]
struct PamResponse {
    resp: *mut c_char,
    // Unused by libpam; must be zero.
    _resp_retcode: c_int,
}

type ConvFn = unsafe extern "C" fn(
    c_int,
    *mut *const PamMessage,
    *mut *mut PamResponse,
    *mut c_void,
) -> c_int;

#[repr(C)]
struct PamConv {
    conv: Option<ConvFn>,
    appdata_ptr: *mut c_void,
}

type PamStartFn =
    unsafe extern "C" fn(*const c_char, *const c_char, *const PamConv, *mut *mut c_void) -> c_int;
type PamAuthenticateFn = unsafe extern "C" fn(*mut c_void, c_int) -> c_int;
type PamEndFn = unsafe extern "C" fn(*mut c_void, c_int) -> c_int;

/// Answers handed to the PAM conversation callback.
struct Credentials {
    user: CString,
    secret: Zeroizing<Vec<u8>>,
}

pub struct PamAuthenticator {
    library: *mut c_void,
    start: PamStartFn,
    authenticate: PamAuthenticateFn,
    end: PamEndFn,
    service: CString,
}

// The dlopen handle and the resolved function pointers are process-global
// and valid on any thread.
unsafe impl Send for PamAuthenticator {}

impl PamAuthenticator {
    /// Open libpam and resolve the entry points used for authentication.
    pub fn load(service: &str) -> Result<Self, AuthError> {
        let service = CString::new(service).map_err(|_| AuthError::InvalidService {
            service: service.to_string(),
        })?;

        let library = open_library()?;
        match unsafe { resolve(library) } {
            Ok((start, authenticate, end)) => Ok(Self {
                library,
                start,
                authenticate,
                end,
                service,
            }),
            Err(err) => {
                unsafe { libc::dlclose(library) };
                Err(err)
            }
        }
    }

    fn verify(&self, user: &str, secret: &str) -> bool {
        let Ok(user) = CString::new(user) else {
            return false;
        };
        if secret.as_bytes().contains(&0) {
            return false;
        }

        let mut secret_bytes = Zeroizing::new(Vec::with_capacity(secret.len() + 1));
        secret_bytes.extend_from_slice(secret.as_bytes());
        secret_bytes.push(0);

        let credentials = Credentials {
            user,
            secret: secret_bytes,
        };
        let conversation = PamConv {
            conv: Some(converse),
            appdata_ptr: &credentials as *const Credentials as *mut c_void,
        };

        let mut handle: *mut c_void = ptr::null_mut();
        unsafe {
            let status = (self.start)(
                self.service.as_ptr(),
                credentials.user.as_ptr(),
                &conversation,
                &mut handle,
            );
            if status != PAM_SUCCESS || handle.is_null() {
                tracing::warn!(status, "pam_start failed");
                return false;
            }

            let status = (self.authenticate)(handle, 0);
            (self.end)(handle, status);
            if status != PAM_SUCCESS {
                tracing::debug!(status, "pam_authenticate rejected credentials");
            }
            status == PAM_SUCCESS
        }
    }
}

impl Authenticator for PamAuthenticator {
    fn name(&self) -> &'static str {
        "pam"
    }

    fn authenticate(&self, user: &str, secret: &str) -> bool {
        self.verify(user, secret)
    }
}

impl Drop for PamAuthenticator {
    fn drop(&mut self) {
        unsafe {
            libc::dlclose(self.library);
        }
    }
}

fn open_library() -> Result<*mut c_void, AuthError> {
    let mut last_error = String::from("no candidates");
    for name in LIBRARY_NAMES {
        let handle = unsafe { libc::dlopen(name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if !handle.is_null() {
            return Ok(handle);
        }
        last_error = dl_error().unwrap_or_else(|| format!("{} not found", name.to_string_lossy()));
    }
    Err(AuthError::LibraryUnavailable { reason: last_error })
}

unsafe fn resolve(
    library: *mut c_void,
) -> Result<(PamStartFn, PamAuthenticateFn, PamEndFn), AuthError> {
    let start = symbol(library, c"pam_start", "pam_start")?;
    let authenticate = symbol(library, c"pam_authenticate", "pam_authenticate")?;
    let end = symbol(library, c"pam_end", "pam_end")?;
    Ok((
        std::mem::transmute::<*mut c_void, PamStartFn>(start),
        std::mem::transmute::<*mut c_void, PamAuthenticateFn>(authenticate),
        std::mem::transmute::<*mut c_void, PamEndFn>(end),
    ))
}

unsafe fn symbol(
    library: *mut c_void,
    name: &CStr,
    label: &'static str,
) -> Result<*mut c_void, AuthError> {
    let address = libc::dlsym(library, name.as_ptr());
    if address.is_null() {
        Err(AuthError::SymbolMissing { symbol: label })
    } else {
        Ok(address)
    }
}

fn dl_error() -> Option<String> {
    unsafe {
        let message = libc::dlerror();
        if message.is_null() {
            None
        } else {
            Some(CStr::from_ptr(message).to_string_lossy().into_owned())
        }
    }
}

/// PAM conversation callback.
///
/// Echo-off prompts get the password, echo-on prompts the user name.
/// Informational messages get no reply. Responses are allocated with
/// the C allocator because libpam frees them.
unsafe extern "C" fn converse(
    num_msg: c_int,
    msg: *mut *const PamMessage,
    resp: *mut *mut PamResponse,
    appdata_ptr: *mut c_void,
) -> c_int {
    if num_msg <= 0 || msg.is_null() || resp.is_null() || appdata_ptr.is_null() {
        return PAM_CONV_ERR;
    }
    let credentials = &*(appdata_ptr as *const Credentials);
    let count = num_msg as usize;

    let replies =
        libc::calloc(count, std::mem::size_of::<PamResponse>()) as *mut PamResponse;
    if replies.is_null() {
        return PAM_BUF_ERR;
    }

    for index in 0..count {
        let message = *msg.add(index);
        if message.is_null() {
            free_replies(replies, count);
            return PAM_CONV_ERR;
        }

        let answer = match (*message).msg_style {
            PAM_PROMPT_ECHO_OFF => Some(credentials.secret.as_ptr() as *const c_char),
            PAM_PROMPT_ECHO_ON => Some(credentials.user.as_ptr()),
            PAM_ERROR_MSG | PAM_TEXT_INFO => {
                if !(*message).msg.is_null() {
                    let text = CStr::from_ptr((*message).msg).to_string_lossy();
                    tracing::debug!(style = (*message).msg_style, "PAM says: {}", text);
                }
                None
            }
            _ => {
                free_replies(replies, count);
                return PAM_CONV_ERR;
            }
        };

        let reply = match answer {
            Some(answer) => {
                let copy = libc::strdup(answer);
                if copy.is_null() {
                    free_replies(replies, count);
                    return PAM_BUF_ERR;
                }
                copy
            }
            None => ptr::null_mut(),
        };
        replies.add(index).write(PamResponse {
            resp: reply,
            _resp_retcode: 0,
        });
    }

    *resp = replies;
    PAM_SUCCESS
}

unsafe fn free_replies(replies: *mut PamResponse, count: usize) {
    for index in 0..count {
        let reply = &mut *replies.add(index);
        if !reply.resp.is_null() {
            let len = libc::strlen(reply.resp);
            ptr::write_bytes(reply.resp, 0, len);
            libc::free(reply.resp as *mut c_void);
            reply.resp = ptr::null_mut();
        }
    }
    libc::free(replies as *mut c_void);
}
