//! Shared test harness: an in-process implementation of the native C surface
//! installed through `ferrotorch_sys::install`.
//!
//! The stub performs no tensor math. It keeps just enough bookkeeping (shape,
//! element type, device, raw bytes) to let the tests verify that every shim
//! forwards its arguments unchanged, surfaces native errors faithfully, and
//! releases each handle exactly once. Call recording, failure injection and
//! the live-handle counters are thread-local so parallel tests stay isolated.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::ffi::{CStr, CString};
use std::sync::OnceLock;

use ferrotorch_sys::{
    c_char, c_double, c_float, c_int, c_schar, c_void, AllocResultsFn, DataDeleterFn, RawModule,
    RawScalar, RawTensor, TorchApi,
};

// ---------------------------------------------------------------------------
// Thread-local harness state
// ---------------------------------------------------------------------------

thread_local! {
    static CALLS: RefCell<Vec<String>> = RefCell::new(Vec::new());
    static FAIL_NEXT: RefCell<Option<String>> = RefCell::new(None);
    static LAST_ERR: RefCell<Option<CString>> = RefCell::new(None);
    // Messages stay alive after the queue is drained; the real shim also
    // hands out pointers it never reclaims.
    static ERR_KEEPALIVE: RefCell<Vec<CString>> = RefCell::new(Vec::new());
    static LIVE_TENSORS: Cell<i64> = Cell::new(0);
    static LIVE_SCALARS: Cell<i64> = Cell::new(0);
    static LIVE_MODULES: Cell<i64> = Cell::new(0);
}

/// Installs the stub table for this process. Safe to call from every test.
pub fn install() {
    static INSTALLED: OnceLock<()> = OnceLock::new();
    INSTALLED.get_or_init(|| {
        ferrotorch_sys::install(make_api()).expect("stub table installed twice");
    });
}

pub fn take_calls() -> Vec<String> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

/// Makes the next fallible stub call fail with `message`.
pub fn fail_next(message: &str) {
    FAIL_NEXT.with(|slot| *slot.borrow_mut() = Some(message.to_string()));
}

pub fn live_tensors() -> i64 {
    LIVE_TENSORS.with(Cell::get)
}

pub fn live_scalars() -> i64 {
    LIVE_SCALARS.with(Cell::get)
}

pub fn live_modules() -> i64 {
    LIVE_MODULES.with(Cell::get)
}

fn record(entry: String) {
    CALLS.with(|calls| calls.borrow_mut().push(entry));
}

fn set_err(message: &str) {
    let text = CString::new(message).unwrap_or_else(|_| CString::new("stub error").unwrap());
    LAST_ERR.with(|slot| *slot.borrow_mut() = Some(text));
}

/// Consumes a pending failure injection. Returns true when the call should
/// report failure through the sentinel.
fn maybe_fail() -> bool {
    let pending = FAIL_NEXT.with(|slot| slot.borrow_mut().take());
    match pending {
        Some(message) => {
            set_err(&message);
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Dummy native objects
// ---------------------------------------------------------------------------

struct DummyTensor {
    shape: Vec<i64>,
    kind: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
    data: Vec<u8>,
    borrowed: Option<(DataDeleterFn, *mut c_void)>,
}

fn element_width(kind: c_schar) -> usize {
    match kind {
        0 | 1 | 11 => 1,
        2 | 5 | 15 => 2,
        3 | 6 => 4,
        _ => 8,
    }
}

fn numel(shape: &[i64]) -> i64 {
    shape.iter().product()
}

fn make_tensor(shape: Vec<i64>, kind: c_schar) -> RawTensor {
    let bytes = numel(&shape).max(0) as usize * element_width(kind);
    alloc_tensor(DummyTensor {
        shape,
        kind,
        device_type: 0,
        device_index: -1,
        requires_grad: false,
        data: vec![0; bytes],
        borrowed: None,
    })
}

fn alloc_tensor(tensor: DummyTensor) -> RawTensor {
    LIVE_TENSORS.with(|live| live.set(live.get() + 1));
    Box::into_raw(Box::new(tensor)) as RawTensor
}

unsafe fn tensor_ref<'a>(handle: RawTensor) -> &'a mut DummyTensor {
    &mut *(handle as *mut DummyTensor)
}

unsafe fn clone_of(handle: RawTensor) -> RawTensor {
    let t = tensor_ref(handle);
    alloc_tensor(DummyTensor {
        shape: t.shape.clone(),
        kind: t.kind,
        device_type: t.device_type,
        device_index: t.device_index,
        requires_grad: t.requires_grad,
        data: t.data.clone(),
        borrowed: None,
    })
}

unsafe fn result_like(handle: RawTensor) -> RawTensor {
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    clone_of(handle)
}

/// Shape after reducing `dim` (with the usual negative-dimension wrap).
unsafe fn reduced_shape(handle: RawTensor, dim: i64, keepdim: bool) -> Vec<i64> {
    let t = tensor_ref(handle);
    let rank = t.shape.len() as i64;
    let dim = if dim < 0 { dim + rank } else { dim };
    let mut shape = t.shape.clone();
    if dim >= 0 && dim < rank {
        if keepdim {
            shape[dim as usize] = 1;
        } else {
            shape.remove(dim as usize);
        }
    }
    shape
}

unsafe fn fill_outputs(allocator: AllocResultsFn, shapes: &[Vec<i64>], kind: c_schar) {
    let slots = allocator(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        *slots.add(i) = make_tensor(shape.clone(), kind);
    }
}

struct DummyScalar {
    value: f64,
}

fn alloc_scalar(value: f64) -> RawScalar {
    LIVE_SCALARS.with(|live| live.set(live.get() + 1));
    Box::into_raw(Box::new(DummyScalar { value })) as RawScalar
}

unsafe fn scalar_value(handle: RawScalar) -> f64 {
    (*(handle as *mut DummyScalar)).value
}

struct DummyModule;

fn alloc_module() -> RawModule {
    LIVE_MODULES.with(|live| live.set(live.get() + 1));
    Box::into_raw(Box::new(DummyModule)) as RawModule
}

// ---------------------------------------------------------------------------
// torch globals
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_manual_seed(seed: i64) {
    record(format!("manual_seed {seed}"));
}

unsafe extern "C" fn stub_cuda_is_available() -> c_int {
    0
}

unsafe extern "C" fn stub_cuda_cudnn_is_available() -> c_int {
    0
}

unsafe extern "C" fn stub_cuda_device_count() -> c_int {
    0
}

unsafe extern "C" fn stub_last_err() -> *const c_char {
    let pending = LAST_ERR.with(|slot| slot.borrow_mut().take());
    match pending {
        Some(text) => ERR_KEEPALIVE.with(|keep| {
            let ptr = text.as_ptr();
            keep.borrow_mut().push(text);
            ptr
        }),
        None => std::ptr::null(),
    }
}

// ---------------------------------------------------------------------------
// scalars
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_scalar_i8(value: i8) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_u8(value: u8) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_i16(value: i16) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_i32(value: c_int) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_i64(value: i64) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_f32(value: c_float) -> RawScalar {
    alloc_scalar(value as f64)
}
unsafe extern "C" fn stub_scalar_f64(value: c_double) -> RawScalar {
    alloc_scalar(value)
}
unsafe extern "C" fn stub_scalar_bool(value: bool) -> RawScalar {
    alloc_scalar(if value { 1.0 } else { 0.0 })
}

unsafe extern "C" fn stub_scalar_to_i8(handle: RawScalar) -> i8 {
    scalar_value(handle) as i8
}
unsafe extern "C" fn stub_scalar_to_u8(handle: RawScalar) -> u8 {
    scalar_value(handle) as u8
}
unsafe extern "C" fn stub_scalar_to_i16(handle: RawScalar) -> i16 {
    scalar_value(handle) as i16
}
unsafe extern "C" fn stub_scalar_to_i32(handle: RawScalar) -> c_int {
    scalar_value(handle) as c_int
}
unsafe extern "C" fn stub_scalar_to_i64(handle: RawScalar) -> i64 {
    scalar_value(handle) as i64
}
unsafe extern "C" fn stub_scalar_to_f32(handle: RawScalar) -> c_float {
    scalar_value(handle) as c_float
}
unsafe extern "C" fn stub_scalar_to_f64(handle: RawScalar) -> c_double {
    scalar_value(handle)
}
unsafe extern "C" fn stub_scalar_to_bool(handle: RawScalar) -> bool {
    scalar_value(handle) != 0.0
}

unsafe extern "C" fn stub_dispose_scalar(handle: RawScalar) {
    drop(Box::from_raw(handle as *mut DummyScalar));
    LIVE_SCALARS.with(|live| live.set(live.get() - 1));
}

// ---------------------------------------------------------------------------
// tensor lifecycle & properties
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_dispose(handle: RawTensor) {
    let tensor = Box::from_raw(handle as *mut DummyTensor);
    if let Some((deleter, data)) = tensor.borrowed {
        deleter(data);
    }
    drop(tensor);
    LIVE_TENSORS.with(|live| live.set(live.get() - 1));
}

unsafe extern "C" fn stub_ndimension(handle: RawTensor) -> i64 {
    tensor_ref(handle).shape.len() as i64
}

unsafe extern "C" fn stub_numel(handle: RawTensor) -> i64 {
    numel(&tensor_ref(handle).shape)
}

unsafe extern "C" fn stub_element_size(handle: RawTensor) -> i64 {
    element_width(tensor_ref(handle).kind) as i64
}

unsafe extern "C" fn stub_size(handle: RawTensor, dim: i64) -> i64 {
    let t = tensor_ref(handle);
    match t.shape.get(dim as usize) {
        Some(extent) => *extent,
        None => {
            set_err("dimension out of range");
            0
        }
    }
}

unsafe extern "C" fn stub_stride(handle: RawTensor, dim: i64) -> i64 {
    let t = tensor_ref(handle);
    if dim as usize >= t.shape.len() {
        set_err("dimension out of range");
        return 0;
    }
    t.shape[dim as usize + 1..].iter().product::<i64>().max(1)
}

unsafe extern "C" fn stub_type(handle: RawTensor) -> c_schar {
    tensor_ref(handle).kind
}

unsafe extern "C" fn stub_device_str(handle: RawTensor) -> *const c_char {
    let t = tensor_ref(handle);
    let text = if t.device_type == 1 {
        format!("cuda:{}", t.device_index.max(0))
    } else {
        "cpu".to_string()
    };
    let c_text = CString::new(text).unwrap();
    let bytes = c_text.as_bytes_with_nul();
    // The binding frees this with libc::free, so it must come from malloc.
    let buffer = libc::malloc(bytes.len()) as *mut u8;
    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, bytes.len());
    buffer as *const c_char
}

unsafe extern "C" fn stub_device_type(handle: RawTensor) -> c_int {
    tensor_ref(handle).device_type
}

unsafe extern "C" fn stub_device_index(handle: RawTensor) -> c_int {
    tensor_ref(handle).device_index
}

unsafe extern "C" fn stub_is_sparse(_handle: RawTensor) -> bool {
    false
}

unsafe extern "C" fn stub_requires_grad(handle: RawTensor) -> bool {
    tensor_ref(handle).requires_grad
}

unsafe extern "C" fn stub_set_requires_grad(handle: RawTensor, requires_grad: bool) -> RawTensor {
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let result = clone_of(handle);
    tensor_ref(result).requires_grad = requires_grad;
    result
}

unsafe extern "C" fn stub_data(handle: RawTensor) -> *mut c_void {
    tensor_ref(handle).data.as_mut_ptr() as *mut c_void
}

unsafe extern "C" fn stub_data_idx_f16(_handle: RawTensor, _i: i64) -> c_float {
    0.0
}

unsafe extern "C" fn stub_data_idx_bf16(_handle: RawTensor, _i: i64) -> c_float {
    0.0
}

unsafe extern "C" fn stub_item(handle: RawTensor) -> RawScalar {
    let t = tensor_ref(handle);
    if numel(&t.shape) != 1 {
        set_err("item requires a single-element tensor");
        return std::ptr::null_mut();
    }
    let value = match t.kind {
        6 => f32::from_le_bytes(t.data[0..4].try_into().unwrap()) as f64,
        7 => f64::from_le_bytes(t.data[0..8].try_into().unwrap()),
        4 => i64::from_le_bytes(t.data[0..8].try_into().unwrap()) as f64,
        3 => i32::from_le_bytes(t.data[0..4].try_into().unwrap()) as f64,
        _ => t.data.first().copied().unwrap_or(0) as f64,
    };
    alloc_scalar(value)
}

unsafe extern "C" fn stub_fill_(handle: RawTensor, value: RawScalar) -> RawTensor {
    record(format!("fill_ {}", scalar_value(value)));
    result_like(handle)
}

macro_rules! stub_get {
    ($name:ident, $($idx:ident),+) => {
        unsafe extern "C" fn $name(handle: RawTensor, $($idx: i64),+) -> RawTensor {
            let indices = [$($idx),+];
            record(format!("{} {:?}", stringify!($name), indices));
            if maybe_fail() {
                return std::ptr::null_mut();
            }
            let t = tensor_ref(handle);
            if indices.len() > t.shape.len() {
                set_err("too many indices for tensor");
                return std::ptr::null_mut();
            }
            make_tensor(t.shape[indices.len()..].to_vec(), t.kind)
        }
    };
}

stub_get!(stub_get1, i1);
stub_get!(stub_get2, i1, i2);
stub_get!(stub_get3, i1, i2, i3);
stub_get!(stub_get4, i1, i2, i3, i4);
stub_get!(stub_get5, i1, i2, i3, i4, i5);
stub_get!(stub_get6, i1, i2, i3, i4, i5, i6);

macro_rules! stub_set {
    ($name:ident, $($idx:ident),+) => {
        unsafe extern "C" fn $name(_handle: RawTensor, $($idx: i64,)+ value: RawScalar) {
            let indices = [$($idx),+];
            record(format!("{} {:?} = {}", stringify!($name), indices, scalar_value(value)));
            maybe_fail();
        }
    };
}

stub_set!(stub_set1, i1);
stub_set!(stub_set2, i1, i2);
stub_set!(stub_set3, i1, i2, i3);
stub_set!(stub_set4, i1, i2, i3, i4);
stub_set!(stub_set5, i1, i2, i3, i4, i5);
stub_set!(stub_set6, i1, i2, i3, i4, i5, i6);

unsafe extern "C" fn stub_backward(_handle: RawTensor) {
    record("backward".to_string());
    maybe_fail();
}

unsafe extern "C" fn stub_grad(_handle: RawTensor) -> RawTensor {
    // No gradient accumulated; distinct from a failure because no error is
    // queued.
    std::ptr::null_mut()
}

unsafe extern "C" fn stub_cpu(handle: RawTensor) -> RawTensor {
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let result = clone_of(handle);
    let t = tensor_ref(result);
    t.device_type = 0;
    t.device_index = -1;
    result
}

unsafe extern "C" fn stub_cuda(_handle: RawTensor) -> RawTensor {
    set_err("CUDA is not available in the stub runtime");
    std::ptr::null_mut()
}

unsafe extern "C" fn stub_to_device(
    handle: RawTensor,
    device_type: c_int,
    device_index: c_int,
) -> RawTensor {
    record(format!("to_device {device_type}:{device_index}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let result = clone_of(handle);
    let t = tensor_ref(result);
    t.device_type = device_type;
    t.device_index = device_index;
    result
}

unsafe extern "C" fn stub_to_type(handle: RawTensor, scalar_type: c_schar) -> RawTensor {
    record(format!("to_type {scalar_type}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let result = clone_of(handle);
    let t = tensor_ref(result);
    t.kind = scalar_type;
    t.data = vec![0; numel(&t.shape).max(0) as usize * element_width(scalar_type)];
    result
}

unsafe extern "C" fn stub_equal(lhs: RawTensor, rhs: RawTensor) -> bool {
    let a = tensor_ref(lhs);
    let b = tensor_ref(rhs);
    a.shape == b.shape && a.kind == b.kind && a.data == b.data
}

unsafe extern "C" fn stub_allclose(
    lhs: RawTensor,
    rhs: RawTensor,
    rtol: c_double,
    atol: c_double,
    equal_nan: bool,
) -> bool {
    record(format!("allclose rtol={rtol} atol={atol} equal_nan={equal_nan}"));
    stub_equal(lhs, rhs)
}

// Persistence uses a tiny container so save/load round-trips are observable:
// [kind: u8][rank: u8][extents: i64 le ...][data bytes].
unsafe extern "C" fn stub_save(handle: RawTensor, location: *const c_char) {
    let path = CStr::from_ptr(location).to_string_lossy().into_owned();
    record(format!("save {path}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    let mut bytes = vec![t.kind as u8, t.shape.len() as u8];
    for extent in &t.shape {
        bytes.extend_from_slice(&extent.to_le_bytes());
    }
    bytes.extend_from_slice(&t.data);
    if std::fs::write(&path, bytes).is_err() {
        set_err("could not write tensor file");
    }
}

unsafe extern "C" fn stub_load(location: *const c_char) -> RawTensor {
    let path = CStr::from_ptr(location).to_string_lossy().into_owned();
    record(format!("load {path}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => {
            set_err("no such serialized tensor");
            return std::ptr::null_mut();
        }
    };
    if bytes.len() < 2 {
        set_err("truncated tensor file");
        return std::ptr::null_mut();
    }
    let kind = bytes[0] as c_schar;
    let rank = bytes[1] as usize;
    let mut shape = Vec::with_capacity(rank);
    let mut offset = 2;
    for _ in 0..rank {
        shape.push(i64::from_le_bytes(
            bytes[offset..offset + 8].try_into().unwrap(),
        ));
        offset += 8;
    }
    let handle = make_tensor(shape, kind);
    tensor_ref(handle).data = bytes[offset..].to_vec();
    handle
}

unsafe extern "C" fn stub_load_into(handle: RawTensor, location: *const c_char) {
    let path = CStr::from_ptr(location).to_string_lossy().into_owned();
    record(format!("load_into {path}"));
    if maybe_fail() {
        return;
    }
    let loaded = stub_load(location);
    if loaded.is_null() {
        return;
    }
    let src = tensor_ref(loaded);
    let dst = tensor_ref(handle);
    dst.kind = src.kind;
    dst.shape = src.shape.clone();
    dst.data = src.data.clone();
    stub_dispose(loaded);
}

// ---------------------------------------------------------------------------
// creation
// ---------------------------------------------------------------------------

unsafe fn sized_creation(
    op: &str,
    sizes: *const i64,
    sizes_len: c_int,
    scalar_type: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
) -> RawTensor {
    let shape = std::slice::from_raw_parts(sizes, sizes_len as usize).to_vec();
    record(format!(
        "{op} shape={shape:?} kind={scalar_type} device={device_type}:{device_index} grad={requires_grad}"
    ));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let handle = make_tensor(shape, scalar_type);
    let t = tensor_ref(handle);
    t.device_type = device_type;
    t.device_index = device_index;
    t.requires_grad = requires_grad;
    handle
}

macro_rules! stub_sized_creation {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            sizes: *const i64,
            sizes_len: c_int,
            scalar_type: c_schar,
            device_type: c_int,
            device_index: c_int,
            requires_grad: bool,
        ) -> RawTensor {
            sized_creation(
                $op,
                sizes,
                sizes_len,
                scalar_type,
                device_type,
                device_index,
                requires_grad,
            )
        }
    };
}

stub_sized_creation!(stub_zeros, "zeros");
stub_sized_creation!(stub_ones, "ones");
stub_sized_creation!(stub_empty, "empty");
stub_sized_creation!(stub_rand, "rand");
stub_sized_creation!(stub_randn, "randn");

unsafe extern "C" fn stub_new(
    data: *mut c_void,
    deleter: DataDeleterFn,
    sizes: *const i64,
    sizes_len: c_int,
    scalar_type: c_schar,
    requires_grad: bool,
) -> RawTensor {
    let shape = std::slice::from_raw_parts(sizes, sizes_len as usize).to_vec();
    record(format!("new shape={shape:?} kind={scalar_type} grad={requires_grad}"));
    if maybe_fail() {
        // A failing constructor never adopts the buffer.
        return std::ptr::null_mut();
    }
    let bytes = numel(&shape).max(0) as usize * element_width(scalar_type);
    let handle = make_tensor(shape, scalar_type);
    let t = tensor_ref(handle);
    t.data = std::slice::from_raw_parts(data as *const u8, bytes).to_vec();
    t.requires_grad = requires_grad;
    // The borrowed buffer is released when this tensor is disposed.
    t.borrowed = Some((deleter, data));
    handle
}

unsafe extern "C" fn stub_full(
    sizes: *const i64,
    sizes_len: c_int,
    value: RawScalar,
    scalar_type: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
) -> RawTensor {
    record(format!("full value={}", scalar_value(value)));
    sized_creation(
        "full",
        sizes,
        sizes_len,
        scalar_type,
        device_type,
        device_index,
        requires_grad,
    )
}

unsafe extern "C" fn stub_arange(
    start: RawScalar,
    end: RawScalar,
    step: RawScalar,
    scalar_type: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
) -> RawTensor {
    let start = scalar_value(start);
    let end = scalar_value(end);
    let step = scalar_value(step);
    record(format!("arange {start}..{end} step {step}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    if step == 0.0 {
        set_err("step must be nonzero");
        return std::ptr::null_mut();
    }
    let count = ((end - start) / step).ceil().max(0.0) as i64;
    let handle = make_tensor(vec![count], scalar_type);
    let t = tensor_ref(handle);
    t.device_type = device_type;
    t.device_index = device_index;
    t.requires_grad = requires_grad;
    handle
}

unsafe extern "C" fn stub_randint(
    high: i64,
    sizes: *const i64,
    sizes_len: c_int,
    scalar_type: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
) -> RawTensor {
    record(format!("randint high={high}"));
    sized_creation(
        "randint",
        sizes,
        sizes_len,
        scalar_type,
        device_type,
        device_index,
        requires_grad,
    )
}

unsafe extern "C" fn stub_randperm(
    n: i64,
    scalar_type: c_schar,
    device_type: c_int,
    device_index: c_int,
    requires_grad: bool,
) -> RawTensor {
    record(format!("randperm n={n}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let handle = make_tensor(vec![n], scalar_type);
    let t = tensor_ref(handle);
    t.device_type = device_type;
    t.device_index = device_index;
    t.requires_grad = requires_grad;
    handle
}

// ---------------------------------------------------------------------------
// generic op shapes
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_unary(handle: RawTensor) -> RawTensor {
    result_like(handle)
}

/// Whole-tensor reductions produce a 0-d result.
unsafe extern "C" fn stub_unary_reduce(handle: RawTensor) -> RawTensor {
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(Vec::new(), tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_binary(lhs: RawTensor, _rhs: RawTensor) -> RawTensor {
    result_like(lhs)
}

unsafe extern "C" fn stub_tensor_scalar(lhs: RawTensor, scalar: RawScalar) -> RawTensor {
    record(format!("tensor_scalar {}", scalar_value(scalar)));
    result_like(lhs)
}

unsafe extern "C" fn stub_add(lhs: RawTensor, _rhs: RawTensor, alpha: RawScalar) -> RawTensor {
    record(format!("add alpha={}", scalar_value(alpha)));
    result_like(lhs)
}

unsafe extern "C" fn stub_add_scalar(
    lhs: RawTensor,
    other: RawScalar,
    alpha: RawScalar,
) -> RawTensor {
    record(format!(
        "add_scalar {} alpha={}",
        scalar_value(other),
        scalar_value(alpha)
    ));
    result_like(lhs)
}

unsafe extern "C" fn stub_addc(
    lhs: RawTensor,
    _tensor1: RawTensor,
    _tensor2: RawTensor,
    value: RawScalar,
) -> RawTensor {
    record(format!("addc value={}", scalar_value(value)));
    result_like(lhs)
}

unsafe extern "C" fn stub_addmm(
    mat: RawTensor,
    _mat1: RawTensor,
    _mat2: RawTensor,
    beta: c_float,
    alpha: c_float,
) -> RawTensor {
    record(format!("addmm beta={beta} alpha={alpha}"));
    result_like(mat)
}

unsafe extern "C" fn stub_einsum(
    equation: *const c_char,
    tensors: *const RawTensor,
    len: c_int,
) -> RawTensor {
    let equation = CStr::from_ptr(equation).to_string_lossy().into_owned();
    record(format!("einsum {equation} operands={len}"));
    if maybe_fail() || len == 0 {
        return std::ptr::null_mut();
    }
    clone_of(*tensors)
}

unsafe extern "C" fn stub_clamp(handle: RawTensor, min: RawScalar, max: RawScalar) -> RawTensor {
    record(format!("clamp {}..{}", scalar_value(min), scalar_value(max)));
    result_like(handle)
}

unsafe extern "C" fn stub_elu(
    handle: RawTensor,
    alpha: RawScalar,
    scale: RawScalar,
    input_scale: RawScalar,
) -> RawTensor {
    record(format!(
        "elu alpha={} scale={} input_scale={}",
        scalar_value(alpha),
        scalar_value(scale),
        scalar_value(input_scale)
    ));
    result_like(handle)
}

// ---------------------------------------------------------------------------
// reductions
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_sum(handle: RawTensor, has_type: bool, scalar_type: c_schar) -> RawTensor {
    record(format!("sum has_type={has_type} type={scalar_type}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let kind = if has_type {
        scalar_type
    } else {
        tensor_ref(handle).kind
    };
    make_tensor(Vec::new(), kind)
}

unsafe extern "C" fn stub_reduce_dims(
    handle: RawTensor,
    dimensions: *const i64,
    len: c_int,
    keepdim: bool,
    has_type: bool,
    scalar_type: c_schar,
) -> RawTensor {
    let dims = std::slice::from_raw_parts(dimensions, len as usize).to_vec();
    record(format!(
        "reduce_dims {dims:?} keepdim={keepdim} has_type={has_type} type={scalar_type}"
    ));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let rank = t.shape.len() as i64;
    let normalized: Vec<usize> = dims
        .iter()
        .map(|&d| (if d < 0 { d + rank } else { d }) as usize)
        .collect();
    let mut shape = Vec::new();
    for (i, extent) in t.shape.iter().enumerate() {
        if normalized.contains(&i) {
            if keepdim {
                shape.push(1);
            }
        } else {
            shape.push(*extent);
        }
    }
    let kind = if has_type { scalar_type } else { t.kind };
    make_tensor(shape, kind)
}

unsafe extern "C" fn stub_reduce_one_dim(handle: RawTensor, dim: i64, keepdim: bool) -> RawTensor {
    record(format!("reduce_one_dim dim={dim} keepdim={keepdim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let shape = reduced_shape(handle, dim, keepdim);
    make_tensor(shape, 4)
}

unsafe extern "C" fn stub_pair_along_dim(
    handle: RawTensor,
    allocator: AllocResultsFn,
    dim: i64,
    keepdim: bool,
) {
    record(format!("pair_along_dim dim={dim} keepdim={keepdim}"));
    if maybe_fail() {
        return;
    }
    let shape = reduced_shape(handle, dim, keepdim);
    let kind = tensor_ref(handle).kind;
    fill_outputs(allocator, &[shape.clone(), shape], kind);
}

unsafe extern "C" fn stub_norm(handle: RawTensor, p: c_float) -> RawTensor {
    record(format!("norm p={p}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(Vec::new(), tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_norm_along(
    handle: RawTensor,
    dim: c_int,
    keepdim: bool,
    p: c_float,
) -> RawTensor {
    record(format!("norm_along dim={dim} keepdim={keepdim} p={p}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let shape = reduced_shape(handle, dim as i64, keepdim);
    make_tensor(shape, tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_cumulative(
    handle: RawTensor,
    dim: i64,
    has_type: bool,
    scalar_type: c_schar,
) -> RawTensor {
    record(format!("cumulative dim={dim} has_type={has_type} type={scalar_type}"));
    result_like(handle)
}

unsafe extern "C" fn stub_pair_cumulative(handle: RawTensor, allocator: AllocResultsFn, dim: i64) {
    record(format!("pair_cumulative dim={dim}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    fill_outputs(allocator, &[t.shape.clone(), t.shape.clone()], t.kind);
}

unsafe extern "C" fn stub_logcumsumexp(handle: RawTensor, dim: i64) -> RawTensor {
    record(format!("logcumsumexp dim={dim}"));
    result_like(handle)
}

unsafe extern "C" fn stub_bincount(
    handle: RawTensor,
    weights: RawTensor,
    minlength: i64,
) -> RawTensor {
    record(format!(
        "bincount weighted={} minlength={minlength}",
        !weights.is_null()
    ));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(vec![minlength], tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_topk(
    handle: RawTensor,
    allocator: AllocResultsFn,
    k: c_int,
    dim: i64,
    largest: bool,
    sorted: bool,
) {
    record(format!("topk k={k} dim={dim} largest={largest} sorted={sorted}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    let rank = t.shape.len() as i64;
    let dim = if dim < 0 { dim + rank } else { dim };
    let mut shape = t.shape.clone();
    if dim >= 0 && (dim as usize) < shape.len() {
        shape[dim as usize] = k as i64;
    }
    fill_outputs(allocator, &[shape.clone(), shape], t.kind);
}

// ---------------------------------------------------------------------------
// views
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_reshape(handle: RawTensor, shape: *const i64, len: c_int) -> RawTensor {
    let shape = std::slice::from_raw_parts(shape, len as usize).to_vec();
    record(format!("reshape {shape:?}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(shape, tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_expand(
    handle: RawTensor,
    sizes: *const i64,
    len: c_int,
    is_implicit: bool,
) -> RawTensor {
    let sizes = std::slice::from_raw_parts(sizes, len as usize).to_vec();
    record(format!("expand {sizes:?} implicit={is_implicit}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(sizes, tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_permute(handle: RawTensor, dims: *const i64, len: c_int) -> RawTensor {
    let dims = std::slice::from_raw_parts(dims, len as usize).to_vec();
    record(format!("permute {dims:?}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    if dims.len() != t.shape.len() {
        set_err("permutation rank mismatch");
        return std::ptr::null_mut();
    }
    let shape = dims.iter().map(|&d| t.shape[d as usize]).collect();
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_flip(handle: RawTensor, dims: *const i64, len: c_int) -> RawTensor {
    let dims = std::slice::from_raw_parts(dims, len as usize).to_vec();
    record(format!("flip {dims:?}"));
    result_like(handle)
}

unsafe extern "C" fn stub_transpose(handle: RawTensor, dim1: i64, dim2: i64) -> RawTensor {
    record(format!("transpose {dim1} {dim2}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    if (dim1 as usize) < shape.len() && (dim2 as usize) < shape.len() {
        shape.swap(dim1 as usize, dim2 as usize);
    }
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_t(handle: RawTensor) -> RawTensor {
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    shape.reverse();
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_squeeze(handle: RawTensor, dim: i64) -> RawTensor {
    record(format!("squeeze {dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    if (dim as usize) < shape.len() && shape[dim as usize] == 1 {
        shape.remove(dim as usize);
    }
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_unsqueeze(handle: RawTensor, dim: i64) -> RawTensor {
    record(format!("unsqueeze {dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    let dim = (dim as usize).min(shape.len());
    shape.insert(dim, 1);
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_narrow(
    handle: RawTensor,
    dim: i64,
    start: i64,
    length: i64,
) -> RawTensor {
    record(format!("narrow dim={dim} start={start} length={length}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    if (dim as usize) < shape.len() {
        shape[dim as usize] = length;
    }
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_slice(
    handle: RawTensor,
    dim: i64,
    start: i64,
    finish: i64,
    step: i64,
) -> RawTensor {
    record(format!("slice dim={dim} start={start} finish={finish} step={step}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    if step <= 0 {
        set_err("slice step must be positive");
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let mut shape = t.shape.clone();
    if (dim as usize) < shape.len() {
        shape[dim as usize] = ((finish - start) + step - 1) / step;
    }
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_unbind(handle: RawTensor, allocator: AllocResultsFn, dim: i64) {
    record(format!("unbind dim={dim}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    if (dim as usize) >= t.shape.len() {
        set_err("dimension out of range");
        return;
    }
    let count = t.shape[dim as usize] as usize;
    let mut shape = t.shape.clone();
    shape.remove(dim as usize);
    let shapes = vec![shape; count];
    fill_outputs(allocator, &shapes, t.kind);
}

unsafe extern "C" fn stub_split_with_size(
    handle: RawTensor,
    allocator: AllocResultsFn,
    size: i64,
    dim: i64,
) {
    record(format!("split_with_size size={size} dim={dim}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    if size <= 0 || (dim as usize) >= t.shape.len() {
        set_err("bad split");
        return;
    }
    let extent = t.shape[dim as usize];
    let mut shapes = Vec::new();
    let mut remaining = extent;
    while remaining > 0 {
        let mut shape = t.shape.clone();
        shape[dim as usize] = remaining.min(size);
        shapes.push(shape);
        remaining -= size;
    }
    fill_outputs(allocator, &shapes, t.kind);
}

unsafe extern "C" fn stub_split_with_sizes(
    handle: RawTensor,
    allocator: AllocResultsFn,
    sizes: *const i64,
    len: c_int,
    dim: i64,
) {
    let sizes = std::slice::from_raw_parts(sizes, len as usize).to_vec();
    record(format!("split_with_sizes {sizes:?} dim={dim}"));
    if maybe_fail() {
        return;
    }
    let t = tensor_ref(handle);
    let shapes: Vec<Vec<i64>> = sizes
        .iter()
        .map(|&size| {
            let mut shape = t.shape.clone();
            if (dim as usize) < shape.len() {
                shape[dim as usize] = size;
            }
            shape
        })
        .collect();
    fill_outputs(allocator, &shapes, t.kind);
}

unsafe extern "C" fn stub_cat(tensors: *const RawTensor, len: c_int, dim: i64) -> RawTensor {
    record(format!("cat len={len} dim={dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    if len == 0 {
        set_err("cat expects a non-empty list");
        return std::ptr::null_mut();
    }
    let handles = std::slice::from_raw_parts(tensors, len as usize);
    let first = tensor_ref(handles[0]);
    let mut shape = first.shape.clone();
    if (dim as usize) < shape.len() {
        shape[dim as usize] = handles
            .iter()
            .map(|&h| tensor_ref(h).shape[dim as usize])
            .sum();
    }
    make_tensor(shape, first.kind)
}

unsafe extern "C" fn stub_stack(tensors: *const RawTensor, len: c_int, dim: i64) -> RawTensor {
    record(format!("stack len={len} dim={dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    if len == 0 {
        set_err("stack expects a non-empty list");
        return std::ptr::null_mut();
    }
    let handles = std::slice::from_raw_parts(tensors, len as usize);
    let first = tensor_ref(handles[0]);
    let mut shape = first.shape.clone();
    let dim = (dim as usize).min(shape.len());
    shape.insert(dim, len as i64);
    make_tensor(shape, first.kind)
}

// ---------------------------------------------------------------------------
// indexing
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_index_select(
    handle: RawTensor,
    dim: i64,
    index: RawTensor,
) -> RawTensor {
    record(format!("index_select dim={dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let t = tensor_ref(handle);
    let picked = numel(&tensor_ref(index).shape);
    let mut shape = t.shape.clone();
    if (dim as usize) < shape.len() {
        shape[dim as usize] = picked;
    }
    make_tensor(shape, t.kind)
}

unsafe extern "C" fn stub_index_fill(
    handle: RawTensor,
    dim: i64,
    _index: RawTensor,
    value: RawScalar,
) -> RawTensor {
    record(format!("index_fill dim={dim} value={}", scalar_value(value)));
    result_like(handle)
}

unsafe extern "C" fn stub_gather(handle: RawTensor, dim: i64, index: RawTensor) -> RawTensor {
    record(format!("gather dim={dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    let index = tensor_ref(index);
    make_tensor(index.shape.clone(), tensor_ref(handle).kind)
}

unsafe extern "C" fn stub_scatter(
    handle: RawTensor,
    dim: i64,
    _index: RawTensor,
    _source: RawTensor,
) -> RawTensor {
    record(format!("scatter dim={dim}"));
    result_like(handle)
}

// ---------------------------------------------------------------------------
// activations with extra arguments
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_hardtanh(handle: RawTensor, min: RawScalar, max: RawScalar) -> RawTensor {
    record(format!("hardtanh {}..{}", scalar_value(min), scalar_value(max)));
    result_like(handle)
}

// ---------------------------------------------------------------------------
// convolution / pooling / upsampling
// ---------------------------------------------------------------------------

unsafe fn int_args(ptr: *const i64, len: c_int) -> Vec<i64> {
    std::slice::from_raw_parts(ptr, len as usize).to_vec()
}

macro_rules! stub_conv {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            _weight: RawTensor,
            bias: RawTensor,
            strides: *const i64,
            strides_len: c_int,
            padding: *const i64,
            padding_len: c_int,
            dilation: *const i64,
            dilation_len: c_int,
            groups: i64,
        ) -> RawTensor {
            record(format!(
                "{} bias={} stride={:?} padding={:?} dilation={:?} groups={}",
                $op,
                !bias.is_null(),
                int_args(strides, strides_len),
                int_args(padding, padding_len),
                int_args(dilation, dilation_len),
                groups
            ));
            result_like(input)
        }
    };
}

stub_conv!(stub_conv1d, "conv1d");
stub_conv!(stub_conv2d, "conv2d");
stub_conv!(stub_conv3d, "conv3d");

macro_rules! stub_conv_transpose {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            _weight: RawTensor,
            bias: RawTensor,
            strides: *const i64,
            strides_len: c_int,
            padding: *const i64,
            padding_len: c_int,
            output_padding: *const i64,
            output_padding_len: c_int,
            dilation: *const i64,
            dilation_len: c_int,
            groups: i64,
        ) -> RawTensor {
            record(format!(
                "{} bias={} stride={:?} padding={:?} output_padding={:?} dilation={:?} groups={}",
                $op,
                !bias.is_null(),
                int_args(strides, strides_len),
                int_args(padding, padding_len),
                int_args(output_padding, output_padding_len),
                int_args(dilation, dilation_len),
                groups
            ));
            result_like(input)
        }
    };
}

stub_conv_transpose!(stub_conv_transpose1d, "conv_transpose1d");
stub_conv_transpose!(stub_conv_transpose2d, "conv_transpose2d");
stub_conv_transpose!(stub_conv_transpose3d, "conv_transpose3d");

macro_rules! stub_max_pool {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            kernel: *const i64,
            kernel_len: c_int,
            strides: *const i64,
            strides_len: c_int,
            padding: *const i64,
            padding_len: c_int,
            dilation: *const i64,
            dilation_len: c_int,
            ceil_mode: bool,
        ) -> RawTensor {
            record(format!(
                "{} kernel={:?} stride={:?} padding={:?} dilation={:?} ceil={}",
                $op,
                int_args(kernel, kernel_len),
                int_args(strides, strides_len),
                int_args(padding, padding_len),
                int_args(dilation, dilation_len),
                ceil_mode
            ));
            result_like(input)
        }
    };
}

stub_max_pool!(stub_max_pool1d, "max_pool1d");
stub_max_pool!(stub_max_pool2d, "max_pool2d");
stub_max_pool!(stub_max_pool3d, "max_pool3d");

macro_rules! stub_max_pool_indices {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            allocator: AllocResultsFn,
            kernel: *const i64,
            kernel_len: c_int,
            strides: *const i64,
            strides_len: c_int,
            padding: *const i64,
            padding_len: c_int,
            dilation: *const i64,
            dilation_len: c_int,
            ceil_mode: bool,
        ) {
            record(format!(
                "{} kernel={:?} stride={:?} padding={:?} dilation={:?} ceil={}",
                $op,
                int_args(kernel, kernel_len),
                int_args(strides, strides_len),
                int_args(padding, padding_len),
                int_args(dilation, dilation_len),
                ceil_mode
            ));
            if maybe_fail() {
                return;
            }
            let t = tensor_ref(input);
            fill_outputs(allocator, &[t.shape.clone(), t.shape.clone()], t.kind);
        }
    };
}

stub_max_pool_indices!(stub_max_pool1d_with_indices, "max_pool1d_with_indices");
stub_max_pool_indices!(stub_max_pool2d_with_indices, "max_pool2d_with_indices");
stub_max_pool_indices!(stub_max_pool3d_with_indices, "max_pool3d_with_indices");

unsafe extern "C" fn stub_maxunpool2d(
    input: RawTensor,
    _indices: RawTensor,
    output_size: *const i64,
    output_size_len: c_int,
) -> RawTensor {
    record(format!("maxunpool2d output_size={:?}", int_args(output_size, output_size_len)));
    result_like(input)
}

unsafe extern "C" fn stub_maxunpool3d(
    input: RawTensor,
    _indices: RawTensor,
    output_size: *const i64,
    output_size_len: c_int,
    strides: *const i64,
    strides_len: c_int,
    padding: *const i64,
    padding_len: c_int,
) -> RawTensor {
    record(format!(
        "maxunpool3d output_size={:?} stride={:?} padding={:?}",
        int_args(output_size, output_size_len),
        int_args(strides, strides_len),
        int_args(padding, padding_len)
    ));
    result_like(input)
}

macro_rules! stub_avg_pool {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            kernel: *const i64,
            kernel_len: c_int,
            strides: *const i64,
            strides_len: c_int,
            padding: *const i64,
            padding_len: c_int,
            ceil_mode: bool,
            count_include_pad: bool,
        ) -> RawTensor {
            record(format!(
                "{} kernel={:?} stride={:?} padding={:?} ceil={} include_pad={}",
                $op,
                int_args(kernel, kernel_len),
                int_args(strides, strides_len),
                int_args(padding, padding_len),
                ceil_mode,
                count_include_pad
            ));
            result_like(input)
        }
    };
}

stub_avg_pool!(stub_avg_pool1d, "avg_pool1d");
stub_avg_pool!(stub_avg_pool2d, "avg_pool2d");
stub_avg_pool!(stub_avg_pool3d, "avg_pool3d");

macro_rules! stub_adaptive_avg_pool {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            output_size: *const i64,
            output_size_len: c_int,
        ) -> RawTensor {
            record(format!(
                "{} output_size={:?}",
                $op,
                int_args(output_size, output_size_len)
            ));
            result_like(input)
        }
    };
}

stub_adaptive_avg_pool!(stub_adaptive_avg_pool1d, "adaptive_avg_pool1d");
stub_adaptive_avg_pool!(stub_adaptive_avg_pool2d, "adaptive_avg_pool2d");
stub_adaptive_avg_pool!(stub_adaptive_avg_pool3d, "adaptive_avg_pool3d");

macro_rules! stub_upsample {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(
            input: RawTensor,
            output_size: *const i64,
            output_size_len: c_int,
            scale_factors: *const c_double,
            scale_factors_len: c_int,
        ) -> RawTensor {
            let scales = std::slice::from_raw_parts(scale_factors, scale_factors_len as usize);
            record(format!(
                "{} output_size={:?} scales={:?}",
                $op,
                int_args(output_size, output_size_len),
                scales
            ));
            result_like(input)
        }
    };
}

stub_upsample!(stub_upsample_nearest1d, "upsample_nearest1d");
stub_upsample!(stub_upsample_nearest2d, "upsample_nearest2d");
stub_upsample!(stub_upsample_nearest3d, "upsample_nearest3d");

// ---------------------------------------------------------------------------
// fft & random
// ---------------------------------------------------------------------------

unsafe extern "C" fn stub_fft(handle: RawTensor, signal_ndim: i64, normalized: bool) -> RawTensor {
    record(format!("fft ndim={signal_ndim} normalized={normalized}"));
    result_like(handle)
}

unsafe extern "C" fn stub_rfft(
    handle: RawTensor,
    signal_ndim: i64,
    normalized: bool,
    onesided: bool,
) -> RawTensor {
    record(format!("rfft ndim={signal_ndim} normalized={normalized} onesided={onesided}"));
    result_like(handle)
}

unsafe extern "C" fn stub_irfft(
    handle: RawTensor,
    signal_ndim: i64,
    normalized: bool,
    onesided: bool,
    signal_sizes: *const i64,
    signal_sizes_len: c_int,
) -> RawTensor {
    record(format!(
        "irfft ndim={signal_ndim} normalized={normalized} onesided={onesided} sizes={:?}",
        int_args(signal_sizes, signal_sizes_len)
    ));
    result_like(handle)
}

unsafe extern "C" fn stub_prob(handle: RawTensor, p: c_double) -> RawTensor {
    record(format!("prob {p}"));
    result_like(handle)
}

unsafe extern "C" fn stub_two_doubles(handle: RawTensor, a: c_double, b: c_double) -> RawTensor {
    record(format!("two_doubles {a} {b}"));
    result_like(handle)
}

unsafe extern "C" fn stub_multinomial(
    handle: RawTensor,
    num_samples: c_double,
    replacement: bool,
) -> RawTensor {
    record(format!("multinomial n={num_samples} replacement={replacement}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    make_tensor(vec![num_samples as i64], 4)
}

// ---------------------------------------------------------------------------
// nn modules
// ---------------------------------------------------------------------------

macro_rules! stub_module_ctor {
    ($name:ident, $op:literal) => {
        unsafe extern "C" fn $name(boxed: *mut RawModule) -> RawModule {
            record(format!("{} ctor", $op));
            if maybe_fail() {
                return std::ptr::null_mut();
            }
            *boxed = alloc_module();
            alloc_module()
        }
    };
}

stub_module_ctor!(stub_elu_ctor, "elu");
stub_module_ctor!(stub_sigmoid_ctor, "sigmoid");
stub_module_ctor!(stub_tanh_ctor, "tanh");

unsafe extern "C" fn stub_softmax_ctor(dim: i64, boxed: *mut RawModule) -> RawModule {
    record(format!("softmax ctor dim={dim}"));
    if maybe_fail() {
        return std::ptr::null_mut();
    }
    *boxed = alloc_module();
    alloc_module()
}

unsafe extern "C" fn stub_module_forward(_module: RawModule, tensor: RawTensor) -> RawTensor {
    record("module forward".to_string());
    result_like(tensor)
}

unsafe extern "C" fn stub_module_dispose(module: RawModule) {
    drop(Box::from_raw(module as *mut DummyModule));
    LIVE_MODULES.with(|live| live.set(live.get() - 1));
}

// ---------------------------------------------------------------------------
// the table
// ---------------------------------------------------------------------------

fn make_api() -> TorchApi {
    TorchApi {
        manual_seed: stub_manual_seed,
        cuda_is_available: stub_cuda_is_available,
        cuda_cudnn_is_available: stub_cuda_cudnn_is_available,
        cuda_device_count: stub_cuda_device_count,
        get_and_reset_last_err: stub_last_err,

        int8_to_scalar: stub_scalar_i8,
        uint8_to_scalar: stub_scalar_u8,
        int16_to_scalar: stub_scalar_i16,
        int32_to_scalar: stub_scalar_i32,
        int64_to_scalar: stub_scalar_i64,
        float32_to_scalar: stub_scalar_f32,
        float64_to_scalar: stub_scalar_f64,
        bool_to_scalar: stub_scalar_bool,
        float16_to_scalar: stub_scalar_f32,
        bfloat16_to_scalar: stub_scalar_f32,
        scalar_to_int8: stub_scalar_to_i8,
        scalar_to_uint8: stub_scalar_to_u8,
        scalar_to_int16: stub_scalar_to_i16,
        scalar_to_int32: stub_scalar_to_i32,
        scalar_to_int64: stub_scalar_to_i64,
        scalar_to_float32: stub_scalar_to_f32,
        scalar_to_float64: stub_scalar_to_f64,
        scalar_to_bool: stub_scalar_to_bool,
        dispose_scalar: stub_dispose_scalar,

        dispose: stub_dispose,
        ndimension: stub_ndimension,
        numel: stub_numel,
        element_size: stub_element_size,
        size: stub_size,
        stride: stub_stride,
        scalar_type: stub_type,
        device_str: stub_device_str,
        device_type: stub_device_type,
        device_index: stub_device_index,
        is_sparse: stub_is_sparse,
        requires_grad: stub_requires_grad,
        set_requires_grad: stub_set_requires_grad,
        data: stub_data,
        data_idx_float16: stub_data_idx_f16,
        data_idx_bfloat16: stub_data_idx_bf16,
        item: stub_item,
        fill_: stub_fill_,
        get1: stub_get1,
        get2: stub_get2,
        get3: stub_get3,
        get4: stub_get4,
        get5: stub_get5,
        get6: stub_get6,
        set1: stub_set1,
        set2: stub_set2,
        set3: stub_set3,
        set4: stub_set4,
        set5: stub_set5,
        set6: stub_set6,
        backward: stub_backward,
        grad: stub_grad,
        cpu: stub_cpu,
        cuda: stub_cuda,
        to_device: stub_to_device,
        to_type: stub_to_type,
        clone: stub_unary,
        contiguous: stub_unary,
        equal: stub_equal,
        allclose: stub_allclose,
        save: stub_save,
        load: stub_load,
        load_into: stub_load_into,

        new: stub_new,
        zeros: stub_zeros,
        ones: stub_ones,
        empty: stub_empty,
        full: stub_full,
        arange: stub_arange,
        rand: stub_rand,
        randn: stub_randn,
        randint: stub_randint,
        randperm: stub_randperm,

        add: stub_add,
        add_: stub_add,
        add_scalar: stub_add_scalar,
        add_scalar_: stub_add_scalar,
        sub: stub_binary,
        sub_: stub_binary,
        sub_scalar: stub_tensor_scalar,
        sub_scalar_: stub_tensor_scalar,
        mul: stub_binary,
        mul_: stub_binary,
        mul_scalar: stub_tensor_scalar,
        mul_scalar_: stub_tensor_scalar,
        div: stub_binary,
        div_: stub_binary,
        div_scalar: stub_tensor_scalar,
        div_scalar_: stub_tensor_scalar,
        fmod: stub_binary,
        fmod_scalar: stub_tensor_scalar,
        remainder: stub_binary,
        remainder_scalar: stub_tensor_scalar,
        pow: stub_binary,
        pow_: stub_binary,
        pow_scalar: stub_tensor_scalar,
        pow_scalar_: stub_tensor_scalar,
        neg: stub_unary,
        neg_: stub_unary,
        abs: stub_unary,
        abs_: stub_unary,
        atan2: stub_binary,
        max_elementwise: stub_binary,
        min_elementwise: stub_binary,
        addcmul: stub_addc,
        addcdiv: stub_addc,
        mm: stub_binary,
        bmm: stub_binary,
        matmul: stub_binary,
        addmm: stub_addmm,
        einsum: stub_einsum,

        exp: stub_unary,
        exp_: stub_unary,
        expm1: stub_unary,
        log: stub_unary,
        log_: stub_unary,
        log10: stub_unary,
        log1p: stub_unary,
        sqrt: stub_unary,
        sqrt_: stub_unary,
        rsqrt: stub_unary,
        sin: stub_unary,
        sin_: stub_unary,
        cos: stub_unary,
        cos_: stub_unary,
        tan: stub_unary,
        tan_: stub_unary,
        asin: stub_unary,
        acos: stub_unary,
        atan: stub_unary,
        sinh: stub_unary,
        cosh: stub_unary,
        tanh: stub_unary,
        tanh_: stub_unary,
        ceil: stub_unary,
        ceil_: stub_unary,
        floor: stub_unary,
        floor_: stub_unary,
        round: stub_unary,
        round_: stub_unary,
        frac: stub_unary,
        sign: stub_unary,
        sign_: stub_unary,
        erf: stub_unary,
        erfc: stub_unary,
        erfinv: stub_unary,
        lgamma: stub_unary,

        eq: stub_binary,
        ne: stub_binary,
        lt: stub_binary,
        le: stub_binary,
        gt: stub_binary,
        ge: stub_binary,
        eq_scalar: stub_tensor_scalar,
        ne_scalar: stub_tensor_scalar,
        lt_scalar: stub_tensor_scalar,
        le_scalar: stub_tensor_scalar,
        gt_scalar: stub_tensor_scalar,
        ge_scalar: stub_tensor_scalar,
        logical_and: stub_binary,
        logical_or: stub_binary,
        logical_xor: stub_binary,
        logical_not: stub_unary,
        bitwise_and: stub_binary,
        bitwise_or: stub_binary,
        bitwise_xor: stub_binary,
        bitwise_not: stub_unary,
        clamp: stub_clamp,
        clamp_min: stub_tensor_scalar,
        clamp_max: stub_tensor_scalar,

        sum: stub_sum,
        sum_along_dimensions: stub_reduce_dims,
        mean: stub_unary_reduce,
        mean_along_dimensions: stub_reduce_dims,
        max: stub_unary_reduce,
        min: stub_unary_reduce,
        median: stub_unary_reduce,
        max_along_dimension: stub_pair_along_dim,
        min_along_dimension: stub_pair_along_dim,
        argmax: stub_unary_reduce,
        argmax_along_dimension: stub_reduce_one_dim,
        argmin: stub_unary_reduce,
        argmin_along_dimension: stub_reduce_one_dim,
        all: stub_unary_reduce,
        all_along_dimension: stub_reduce_one_dim,
        any: stub_unary_reduce,
        any_along_dimension: stub_reduce_one_dim,
        norm: stub_norm,
        norm_along_dimension: stub_norm_along,
        cumsum: stub_cumulative,
        cumprod: stub_cumulative,
        cummax: stub_pair_cumulative,
        cummin: stub_pair_cumulative,
        logcumsumexp: stub_logcumsumexp,
        bincount: stub_bincount,
        topk: stub_topk,

        reshape: stub_reshape,
        view: stub_reshape,
        expand: stub_expand,
        permute: stub_permute,
        flip: stub_flip,
        transpose: stub_transpose,
        transpose_: stub_transpose,
        t: stub_t,
        squeeze: stub_squeeze,
        unsqueeze: stub_unsqueeze,
        narrow: stub_narrow,
        slice: stub_slice,
        unbind: stub_unbind,
        split_with_size: stub_split_with_size,
        split_with_sizes: stub_split_with_sizes,
        cat: stub_cat,
        stack: stub_stack,

        index_select: stub_index_select,
        index_fill: stub_index_fill,
        gather: stub_gather,
        scatter: stub_scatter,

        relu: stub_unary,
        relu_: stub_unary,
        relu6: stub_unary,
        relu6_: stub_unary,
        elu: stub_elu,
        elu_: stub_elu,
        celu: stub_unary,
        celu_: stub_unary,
        selu: stub_unary,
        selu_: stub_unary,
        gelu: stub_unary,
        sigmoid: stub_unary,
        sigmoid_: stub_unary,
        silu: stub_unary,
        silu_: stub_unary,
        softplus: stub_unary,
        leaky_relu: stub_tensor_scalar,
        leaky_relu_: stub_tensor_scalar,
        hardsigmoid: stub_unary,
        hardsigmoid_: stub_unary,
        hardswish: stub_unary,
        hardswish_: stub_unary,
        hardtanh: stub_hardtanh,
        hardtanh_: stub_hardtanh,
        log_sigmoid: stub_unary,
        prelu: stub_binary,

        conv1d: stub_conv1d,
        conv2d: stub_conv2d,
        conv3d: stub_conv3d,
        conv_transpose1d: stub_conv_transpose1d,
        conv_transpose2d: stub_conv_transpose2d,
        conv_transpose3d: stub_conv_transpose3d,

        max_pool1d: stub_max_pool1d,
        max_pool2d: stub_max_pool2d,
        max_pool3d: stub_max_pool3d,
        max_pool1d_with_indices: stub_max_pool1d_with_indices,
        max_pool2d_with_indices: stub_max_pool2d_with_indices,
        max_pool3d_with_indices: stub_max_pool3d_with_indices,
        maxunpool2d: stub_maxunpool2d,
        maxunpool3d: stub_maxunpool3d,
        avg_pool1d: stub_avg_pool1d,
        avg_pool2d: stub_avg_pool2d,
        avg_pool3d: stub_avg_pool3d,
        adaptive_avg_pool1d: stub_adaptive_avg_pool1d,
        adaptive_avg_pool2d: stub_adaptive_avg_pool2d,
        adaptive_avg_pool3d: stub_adaptive_avg_pool3d,

        upsample_nearest1d: stub_upsample_nearest1d,
        upsample_nearest2d: stub_upsample_nearest2d,
        upsample_nearest3d: stub_upsample_nearest3d,

        fft: stub_fft,
        ifft: stub_fft,
        rfft: stub_rfft,
        irfft: stub_irfft,

        bernoulli: stub_prob,
        bernoulli_: stub_prob,
        multinomial: stub_multinomial,
        uniform_: stub_two_doubles,
        normal_: stub_two_doubles,
        log_normal_: stub_two_doubles,
        exponential_: stub_prob,
        geometric_: stub_prob,
        cauchy_: stub_two_doubles,

        nn_elu_ctor: stub_elu_ctor,
        nn_elu_forward: stub_module_forward,
        nn_sigmoid_ctor: stub_sigmoid_ctor,
        nn_sigmoid_forward: stub_module_forward,
        nn_tanh_ctor: stub_tanh_ctor,
        nn_tanh_forward: stub_module_forward,
        nn_softmax_ctor: stub_softmax_ctor,
        nn_softmax_forward: stub_module_forward,
        nn_module_dispose: stub_module_dispose,
        nn_boxed_module_dispose: stub_module_dispose,
    }
}
