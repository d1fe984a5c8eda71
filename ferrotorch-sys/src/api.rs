use libloading::Library;

use crate::loader::SysError;
use crate::{
    c_char, c_double, c_float, c_int, c_schar, c_void, AllocResultsFn, BinaryFn, DataDeleterFn,
    RawModule, RawScalar, RawTensor, TensorScalarFn, UnaryFn,
};

/// Resolved table of native entry points.
///
/// One public function pointer per bound symbol, grouped the way the native
/// surface groups them. The table is either resolved from a shared library by
/// [`crate::bindings`] or provided wholesale through [`crate::install`].
///
/// Field names drop the `THSTorch_`/`THSTensor_`/`THSNN_` prefixes; the
/// loader below is the single place that maps a field back to its symbol.
pub struct TorchApi {
    // -- torch globals -------------------------------------------------------
    pub manual_seed: unsafe extern "C" fn(seed: i64),
    pub cuda_is_available: unsafe extern "C" fn() -> c_int,
    pub cuda_cudnn_is_available: unsafe extern "C" fn() -> c_int,
    pub cuda_device_count: unsafe extern "C" fn() -> c_int,
    /// Returns the latest native error message and clears it. Thread-local on
    /// the native side; null when no error is pending.
    pub get_and_reset_last_err: unsafe extern "C" fn() -> *const c_char,

    // -- scalars -------------------------------------------------------------
    pub int8_to_scalar: unsafe extern "C" fn(value: i8) -> RawScalar,
    pub uint8_to_scalar: unsafe extern "C" fn(value: u8) -> RawScalar,
    pub int16_to_scalar: unsafe extern "C" fn(value: i16) -> RawScalar,
    pub int32_to_scalar: unsafe extern "C" fn(value: c_int) -> RawScalar,
    pub int64_to_scalar: unsafe extern "C" fn(value: i64) -> RawScalar,
    pub float32_to_scalar: unsafe extern "C" fn(value: c_float) -> RawScalar,
    pub float64_to_scalar: unsafe extern "C" fn(value: c_double) -> RawScalar,
    pub bool_to_scalar: unsafe extern "C" fn(value: bool) -> RawScalar,
    pub float16_to_scalar: unsafe extern "C" fn(value: c_float) -> RawScalar,
    pub bfloat16_to_scalar: unsafe extern "C" fn(value: c_float) -> RawScalar,
    pub scalar_to_int8: unsafe extern "C" fn(scalar: RawScalar) -> i8,
    pub scalar_to_uint8: unsafe extern "C" fn(scalar: RawScalar) -> u8,
    pub scalar_to_int16: unsafe extern "C" fn(scalar: RawScalar) -> i16,
    pub scalar_to_int32: unsafe extern "C" fn(scalar: RawScalar) -> c_int,
    pub scalar_to_int64: unsafe extern "C" fn(scalar: RawScalar) -> i64,
    pub scalar_to_float32: unsafe extern "C" fn(scalar: RawScalar) -> c_float,
    pub scalar_to_float64: unsafe extern "C" fn(scalar: RawScalar) -> c_double,
    pub scalar_to_bool: unsafe extern "C" fn(scalar: RawScalar) -> bool,
    pub dispose_scalar: unsafe extern "C" fn(scalar: RawScalar),

    // -- tensor lifecycle & properties ---------------------------------------
    pub dispose: unsafe extern "C" fn(tensor: RawTensor),
    pub ndimension: unsafe extern "C" fn(tensor: RawTensor) -> i64,
    pub numel: unsafe extern "C" fn(tensor: RawTensor) -> i64,
    pub element_size: unsafe extern "C" fn(tensor: RawTensor) -> i64,
    pub size: unsafe extern "C" fn(tensor: RawTensor, dim: i64) -> i64,
    pub stride: unsafe extern "C" fn(tensor: RawTensor, dim: i64) -> i64,
    pub scalar_type: unsafe extern "C" fn(tensor: RawTensor) -> c_schar,
    pub device_str: unsafe extern "C" fn(tensor: RawTensor) -> *const c_char,
    pub device_type: unsafe extern "C" fn(tensor: RawTensor) -> c_int,
    pub device_index: unsafe extern "C" fn(tensor: RawTensor) -> c_int,
    pub is_sparse: unsafe extern "C" fn(tensor: RawTensor) -> bool,
    pub requires_grad: unsafe extern "C" fn(tensor: RawTensor) -> bool,
    pub set_requires_grad: unsafe extern "C" fn(tensor: RawTensor, requires_grad: bool) -> RawTensor,
    pub data: unsafe extern "C" fn(tensor: RawTensor) -> *mut c_void,
    pub data_idx_float16: unsafe extern "C" fn(tensor: RawTensor, i: i64) -> c_float,
    pub data_idx_bfloat16: unsafe extern "C" fn(tensor: RawTensor, i: i64) -> c_float,
    pub item: unsafe extern "C" fn(tensor: RawTensor) -> RawScalar,
    pub fill_: TensorScalarFn,
    pub get1: unsafe extern "C" fn(tensor: RawTensor, i1: i64) -> RawTensor,
    pub get2: unsafe extern "C" fn(tensor: RawTensor, i1: i64, i2: i64) -> RawTensor,
    pub get3: unsafe extern "C" fn(tensor: RawTensor, i1: i64, i2: i64, i3: i64) -> RawTensor,
    pub get4:
        unsafe extern "C" fn(tensor: RawTensor, i1: i64, i2: i64, i3: i64, i4: i64) -> RawTensor,
    pub get5: unsafe extern "C" fn(
        tensor: RawTensor,
        i1: i64,
        i2: i64,
        i3: i64,
        i4: i64,
        i5: i64,
    ) -> RawTensor,
    pub get6: unsafe extern "C" fn(
        tensor: RawTensor,
        i1: i64,
        i2: i64,
        i3: i64,
        i4: i64,
        i5: i64,
        i6: i64,
    ) -> RawTensor,
    pub set1: unsafe extern "C" fn(tensor: RawTensor, i1: i64, value: RawScalar),
    pub set2: unsafe extern "C" fn(tensor: RawTensor, i1: i64, i2: i64, value: RawScalar),
    pub set3: unsafe extern "C" fn(tensor: RawTensor, i1: i64, i2: i64, i3: i64, value: RawScalar),
    pub set4: unsafe extern "C" fn(
        tensor: RawTensor,
        i1: i64,
        i2: i64,
        i3: i64,
        i4: i64,
        value: RawScalar,
    ),
    pub set5: unsafe extern "C" fn(
        tensor: RawTensor,
        i1: i64,
        i2: i64,
        i3: i64,
        i4: i64,
        i5: i64,
        value: RawScalar,
    ),
    pub set6: unsafe extern "C" fn(
        tensor: RawTensor,
        i1: i64,
        i2: i64,
        i3: i64,
        i4: i64,
        i5: i64,
        i6: i64,
        value: RawScalar,
    ),
    pub backward: unsafe extern "C" fn(tensor: RawTensor),
    pub grad: unsafe extern "C" fn(tensor: RawTensor) -> RawTensor,
    pub cpu: UnaryFn,
    pub cuda: UnaryFn,
    pub to_device:
        unsafe extern "C" fn(tensor: RawTensor, device_type: c_int, device_index: c_int) -> RawTensor,
    pub to_type: unsafe extern "C" fn(tensor: RawTensor, scalar_type: c_schar) -> RawTensor,
    pub clone: UnaryFn,
    pub contiguous: UnaryFn,
    pub equal: unsafe extern "C" fn(tensor: RawTensor, other: RawTensor) -> bool,
    pub allclose: unsafe extern "C" fn(
        tensor: RawTensor,
        other: RawTensor,
        rtol: c_double,
        atol: c_double,
        equal_nan: bool,
    ) -> bool,
    pub save: unsafe extern "C" fn(tensor: RawTensor, location: *const c_char),
    pub load: unsafe extern "C" fn(location: *const c_char) -> RawTensor,
    pub load_into: unsafe extern "C" fn(tensor: RawTensor, location: *const c_char),

    // -- creation ------------------------------------------------------------
    pub new: unsafe extern "C" fn(
        data: *mut c_void,
        deleter: DataDeleterFn,
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        requires_grad: bool,
    ) -> RawTensor,
    pub zeros: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub ones: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub empty: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub full: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        value: RawScalar,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub arange: unsafe extern "C" fn(
        start: RawScalar,
        end: RawScalar,
        step: RawScalar,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub rand: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub randn: unsafe extern "C" fn(
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub randint: unsafe extern "C" fn(
        high: i64,
        sizes: *const i64,
        sizes_len: c_int,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,
    pub randperm: unsafe extern "C" fn(
        n: i64,
        scalar_type: c_schar,
        device_type: c_int,
        device_index: c_int,
        requires_grad: bool,
    ) -> RawTensor,

    // -- arithmetic ----------------------------------------------------------
    pub add: unsafe extern "C" fn(tensor: RawTensor, other: RawTensor, alpha: RawScalar) -> RawTensor,
    pub add_:
        unsafe extern "C" fn(tensor: RawTensor, other: RawTensor, alpha: RawScalar) -> RawTensor,
    pub add_scalar:
        unsafe extern "C" fn(tensor: RawTensor, other: RawScalar, alpha: RawScalar) -> RawTensor,
    pub add_scalar_:
        unsafe extern "C" fn(tensor: RawTensor, other: RawScalar, alpha: RawScalar) -> RawTensor,
    pub sub: BinaryFn,
    pub sub_: BinaryFn,
    pub sub_scalar: TensorScalarFn,
    pub sub_scalar_: TensorScalarFn,
    pub mul: BinaryFn,
    pub mul_: BinaryFn,
    pub mul_scalar: TensorScalarFn,
    pub mul_scalar_: TensorScalarFn,
    pub div: BinaryFn,
    pub div_: BinaryFn,
    pub div_scalar: TensorScalarFn,
    pub div_scalar_: TensorScalarFn,
    pub fmod: BinaryFn,
    pub fmod_scalar: TensorScalarFn,
    pub remainder: BinaryFn,
    pub remainder_scalar: TensorScalarFn,
    pub pow: BinaryFn,
    pub pow_: BinaryFn,
    pub pow_scalar: TensorScalarFn,
    pub pow_scalar_: TensorScalarFn,
    pub neg: UnaryFn,
    pub neg_: UnaryFn,
    pub abs: UnaryFn,
    pub abs_: UnaryFn,
    pub atan2: BinaryFn,
    pub max_elementwise: BinaryFn,
    pub min_elementwise: BinaryFn,
    pub addcmul: unsafe extern "C" fn(
        tensor: RawTensor,
        tensor1: RawTensor,
        tensor2: RawTensor,
        value: RawScalar,
    ) -> RawTensor,
    pub addcdiv: unsafe extern "C" fn(
        tensor: RawTensor,
        tensor1: RawTensor,
        tensor2: RawTensor,
        value: RawScalar,
    ) -> RawTensor,
    pub mm: BinaryFn,
    pub bmm: BinaryFn,
    pub matmul: BinaryFn,
    pub addmm: unsafe extern "C" fn(
        mat: RawTensor,
        mat1: RawTensor,
        mat2: RawTensor,
        beta: c_float,
        alpha: c_float,
    ) -> RawTensor,
    pub einsum:
        unsafe extern "C" fn(equation: *const c_char, tensors: *const RawTensor, len: c_int)
            -> RawTensor,

    // -- unary math ----------------------------------------------------------
    pub exp: UnaryFn,
    pub exp_: UnaryFn,
    pub expm1: UnaryFn,
    pub log: UnaryFn,
    pub log_: UnaryFn,
    pub log10: UnaryFn,
    pub log1p: UnaryFn,
    pub sqrt: UnaryFn,
    pub sqrt_: UnaryFn,
    pub rsqrt: UnaryFn,
    pub sin: UnaryFn,
    pub sin_: UnaryFn,
    pub cos: UnaryFn,
    pub cos_: UnaryFn,
    pub tan: UnaryFn,
    pub tan_: UnaryFn,
    pub asin: UnaryFn,
    pub acos: UnaryFn,
    pub atan: UnaryFn,
    pub sinh: UnaryFn,
    pub cosh: UnaryFn,
    pub tanh: UnaryFn,
    pub tanh_: UnaryFn,
    pub ceil: UnaryFn,
    pub ceil_: UnaryFn,
    pub floor: UnaryFn,
    pub floor_: UnaryFn,
    pub round: UnaryFn,
    pub round_: UnaryFn,
    pub frac: UnaryFn,
    pub sign: UnaryFn,
    pub sign_: UnaryFn,
    pub erf: UnaryFn,
    pub erfc: UnaryFn,
    pub erfinv: UnaryFn,
    pub lgamma: UnaryFn,

    // -- comparison & logic --------------------------------------------------
    pub eq: BinaryFn,
    pub ne: BinaryFn,
    pub lt: BinaryFn,
    pub le: BinaryFn,
    pub gt: BinaryFn,
    pub ge: BinaryFn,
    pub eq_scalar: TensorScalarFn,
    pub ne_scalar: TensorScalarFn,
    pub lt_scalar: TensorScalarFn,
    pub le_scalar: TensorScalarFn,
    pub gt_scalar: TensorScalarFn,
    pub ge_scalar: TensorScalarFn,
    pub logical_and: BinaryFn,
    pub logical_or: BinaryFn,
    pub logical_xor: BinaryFn,
    pub logical_not: UnaryFn,
    pub bitwise_and: BinaryFn,
    pub bitwise_or: BinaryFn,
    pub bitwise_xor: BinaryFn,
    pub bitwise_not: UnaryFn,
    pub clamp: unsafe extern "C" fn(tensor: RawTensor, min: RawScalar, max: RawScalar) -> RawTensor,
    pub clamp_min: TensorScalarFn,
    pub clamp_max: TensorScalarFn,

    // -- reductions ----------------------------------------------------------
    pub sum: unsafe extern "C" fn(tensor: RawTensor, has_type: bool, scalar_type: c_schar)
        -> RawTensor,
    pub sum_along_dimensions: unsafe extern "C" fn(
        tensor: RawTensor,
        dimensions: *const i64,
        len: c_int,
        keepdim: bool,
        has_type: bool,
        scalar_type: c_schar,
    ) -> RawTensor,
    pub mean: UnaryFn,
    pub mean_along_dimensions: unsafe extern "C" fn(
        tensor: RawTensor,
        dimensions: *const i64,
        len: c_int,
        keepdim: bool,
        has_type: bool,
        scalar_type: c_schar,
    ) -> RawTensor,
    pub max: UnaryFn,
    pub min: UnaryFn,
    pub median: UnaryFn,
    pub max_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, dim: i64, keepdim: bool),
    pub min_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, dim: i64, keepdim: bool),
    pub argmax: UnaryFn,
    pub argmax_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, keepdim: bool) -> RawTensor,
    pub argmin: UnaryFn,
    pub argmin_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, keepdim: bool) -> RawTensor,
    pub all: UnaryFn,
    pub all_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, keepdim: bool) -> RawTensor,
    pub any: UnaryFn,
    pub any_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, keepdim: bool) -> RawTensor,
    pub norm: unsafe extern "C" fn(tensor: RawTensor, p: c_float) -> RawTensor,
    pub norm_along_dimension:
        unsafe extern "C" fn(tensor: RawTensor, dim: c_int, keepdim: bool, p: c_float) -> RawTensor,
    pub cumsum: unsafe extern "C" fn(
        tensor: RawTensor,
        dim: i64,
        has_type: bool,
        scalar_type: c_schar,
    ) -> RawTensor,
    pub cumprod: unsafe extern "C" fn(
        tensor: RawTensor,
        dim: i64,
        has_type: bool,
        scalar_type: c_schar,
    ) -> RawTensor,
    pub cummax: unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, dim: i64),
    pub cummin: unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, dim: i64),
    pub logcumsumexp: unsafe extern "C" fn(tensor: RawTensor, dim: i64) -> RawTensor,
    pub bincount:
        unsafe extern "C" fn(tensor: RawTensor, weights: RawTensor, minlength: i64) -> RawTensor,
    pub topk: unsafe extern "C" fn(
        tensor: RawTensor,
        allocator: AllocResultsFn,
        k: c_int,
        dim: i64,
        largest: bool,
        sorted: bool,
    ),

    // -- views & reshaping ---------------------------------------------------
    pub reshape: unsafe extern "C" fn(tensor: RawTensor, shape: *const i64, len: c_int) -> RawTensor,
    pub view: unsafe extern "C" fn(tensor: RawTensor, shape: *const i64, len: c_int) -> RawTensor,
    pub expand: unsafe extern "C" fn(
        tensor: RawTensor,
        sizes: *const i64,
        len: c_int,
        is_implicit: bool,
    ) -> RawTensor,
    pub permute: unsafe extern "C" fn(tensor: RawTensor, dims: *const i64, len: c_int) -> RawTensor,
    pub flip: unsafe extern "C" fn(tensor: RawTensor, dims: *const i64, len: c_int) -> RawTensor,
    pub transpose: unsafe extern "C" fn(tensor: RawTensor, dim1: i64, dim2: i64) -> RawTensor,
    pub transpose_: unsafe extern "C" fn(tensor: RawTensor, dim1: i64, dim2: i64) -> RawTensor,
    pub t: UnaryFn,
    pub squeeze: unsafe extern "C" fn(tensor: RawTensor, dim: i64) -> RawTensor,
    pub unsqueeze: unsafe extern "C" fn(tensor: RawTensor, dim: i64) -> RawTensor,
    pub narrow:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, start: i64, length: i64) -> RawTensor,
    pub slice: unsafe extern "C" fn(
        tensor: RawTensor,
        dim: i64,
        start: i64,
        finish: i64,
        step: i64,
    ) -> RawTensor,
    pub unbind: unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, dim: i64),
    pub split_with_size:
        unsafe extern "C" fn(tensor: RawTensor, allocator: AllocResultsFn, size: i64, dim: i64),
    pub split_with_sizes: unsafe extern "C" fn(
        tensor: RawTensor,
        allocator: AllocResultsFn,
        sizes: *const i64,
        len: c_int,
        dim: i64,
    ),
    pub cat: unsafe extern "C" fn(tensors: *const RawTensor, len: c_int, dim: i64) -> RawTensor,
    pub stack: unsafe extern "C" fn(tensors: *const RawTensor, len: c_int, dim: i64) -> RawTensor,

    // -- indexing ------------------------------------------------------------
    pub index_select:
        unsafe extern "C" fn(tensor: RawTensor, dim: i64, index: RawTensor) -> RawTensor,
    pub index_fill: unsafe extern "C" fn(
        tensor: RawTensor,
        dim: i64,
        index: RawTensor,
        value: RawScalar,
    ) -> RawTensor,
    pub gather: unsafe extern "C" fn(tensor: RawTensor, dim: i64, index: RawTensor) -> RawTensor,
    pub scatter: unsafe extern "C" fn(
        tensor: RawTensor,
        dim: i64,
        index: RawTensor,
        source: RawTensor,
    ) -> RawTensor,

    // -- activations ---------------------------------------------------------
    pub relu: UnaryFn,
    pub relu_: UnaryFn,
    pub relu6: UnaryFn,
    pub relu6_: UnaryFn,
    pub elu: unsafe extern "C" fn(
        tensor: RawTensor,
        alpha: RawScalar,
        scale: RawScalar,
        input_scale: RawScalar,
    ) -> RawTensor,
    pub elu_: unsafe extern "C" fn(
        tensor: RawTensor,
        alpha: RawScalar,
        scale: RawScalar,
        input_scale: RawScalar,
    ) -> RawTensor,
    pub celu: UnaryFn,
    pub celu_: UnaryFn,
    pub selu: UnaryFn,
    pub selu_: UnaryFn,
    pub gelu: UnaryFn,
    pub sigmoid: UnaryFn,
    pub sigmoid_: UnaryFn,
    pub silu: UnaryFn,
    pub silu_: UnaryFn,
    pub softplus: UnaryFn,
    pub leaky_relu: TensorScalarFn,
    pub leaky_relu_: TensorScalarFn,
    pub hardsigmoid: UnaryFn,
    pub hardsigmoid_: UnaryFn,
    pub hardswish: UnaryFn,
    pub hardswish_: UnaryFn,
    pub hardtanh:
        unsafe extern "C" fn(tensor: RawTensor, min: RawScalar, max: RawScalar) -> RawTensor,
    pub hardtanh_:
        unsafe extern "C" fn(tensor: RawTensor, min: RawScalar, max: RawScalar) -> RawTensor,
    pub log_sigmoid: UnaryFn,
    pub prelu: BinaryFn,

    // -- convolution ---------------------------------------------------------
    pub conv1d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
        bias: RawTensor,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        dilation: *const i64,
        dilation_len: c_int,
        groups: i64,
    ) -> RawTensor,
    pub conv2d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
        bias: RawTensor,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        dilation: *const i64,
        dilation_len: c_int,
        groups: i64,
    ) -> RawTensor,
    pub conv3d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
        bias: RawTensor,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        dilation: *const i64,
        dilation_len: c_int,
        groups: i64,
    ) -> RawTensor,
    pub conv_transpose1d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
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
    ) -> RawTensor,
    pub conv_transpose2d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
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
    ) -> RawTensor,
    pub conv_transpose3d: unsafe extern "C" fn(
        input: RawTensor,
        weight: RawTensor,
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
    ) -> RawTensor,

    // -- pooling -------------------------------------------------------------
    pub max_pool1d: unsafe extern "C" fn(
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
    ) -> RawTensor,
    pub max_pool2d: unsafe extern "C" fn(
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
    ) -> RawTensor,
    pub max_pool3d: unsafe extern "C" fn(
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
    ) -> RawTensor,
    pub max_pool1d_with_indices: unsafe extern "C" fn(
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
    ),
    pub max_pool2d_with_indices: unsafe extern "C" fn(
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
    ),
    pub max_pool3d_with_indices: unsafe extern "C" fn(
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
    ),
    pub maxunpool2d: unsafe extern "C" fn(
        input: RawTensor,
        indices: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
    ) -> RawTensor,
    pub maxunpool3d: unsafe extern "C" fn(
        input: RawTensor,
        indices: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
    ) -> RawTensor,
    pub avg_pool1d: unsafe extern "C" fn(
        input: RawTensor,
        kernel: *const i64,
        kernel_len: c_int,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        ceil_mode: bool,
        count_include_pad: bool,
    ) -> RawTensor,
    pub avg_pool2d: unsafe extern "C" fn(
        input: RawTensor,
        kernel: *const i64,
        kernel_len: c_int,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        ceil_mode: bool,
        count_include_pad: bool,
    ) -> RawTensor,
    pub avg_pool3d: unsafe extern "C" fn(
        input: RawTensor,
        kernel: *const i64,
        kernel_len: c_int,
        strides: *const i64,
        strides_len: c_int,
        padding: *const i64,
        padding_len: c_int,
        ceil_mode: bool,
        count_include_pad: bool,
    ) -> RawTensor,
    pub adaptive_avg_pool1d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
    ) -> RawTensor,
    pub adaptive_avg_pool2d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
    ) -> RawTensor,
    pub adaptive_avg_pool3d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
    ) -> RawTensor,

    // -- upsampling ----------------------------------------------------------
    pub upsample_nearest1d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
        scale_factors: *const c_double,
        scale_factors_len: c_int,
    ) -> RawTensor,
    pub upsample_nearest2d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
        scale_factors: *const c_double,
        scale_factors_len: c_int,
    ) -> RawTensor,
    pub upsample_nearest3d: unsafe extern "C" fn(
        input: RawTensor,
        output_size: *const i64,
        output_size_len: c_int,
        scale_factors: *const c_double,
        scale_factors_len: c_int,
    ) -> RawTensor,

    // -- fft -----------------------------------------------------------------
    pub fft: unsafe extern "C" fn(tensor: RawTensor, signal_ndim: i64, normalized: bool) -> RawTensor,
    pub ifft:
        unsafe extern "C" fn(tensor: RawTensor, signal_ndim: i64, normalized: bool) -> RawTensor,
    pub rfft: unsafe extern "C" fn(
        tensor: RawTensor,
        signal_ndim: i64,
        normalized: bool,
        onesided: bool,
    ) -> RawTensor,
    pub irfft: unsafe extern "C" fn(
        tensor: RawTensor,
        signal_ndim: i64,
        normalized: bool,
        onesided: bool,
        signal_sizes: *const i64,
        signal_sizes_len: c_int,
    ) -> RawTensor,

    // -- random sampling & in-place distributions ----------------------------
    pub bernoulli: unsafe extern "C" fn(tensor: RawTensor, p: c_double) -> RawTensor,
    pub bernoulli_: unsafe extern "C" fn(tensor: RawTensor, p: c_double) -> RawTensor,
    pub multinomial: unsafe extern "C" fn(
        tensor: RawTensor,
        num_samples: c_double,
        replacement: bool,
    ) -> RawTensor,
    pub uniform_: unsafe extern "C" fn(tensor: RawTensor, from: c_double, to: c_double) -> RawTensor,
    pub normal_: unsafe extern "C" fn(tensor: RawTensor, mean: c_double, std: c_double) -> RawTensor,
    pub log_normal_:
        unsafe extern "C" fn(tensor: RawTensor, mean: c_double, std: c_double) -> RawTensor,
    pub exponential_: unsafe extern "C" fn(tensor: RawTensor, lambd: c_double) -> RawTensor,
    pub geometric_: unsafe extern "C" fn(tensor: RawTensor, p: c_double) -> RawTensor,
    pub cauchy_:
        unsafe extern "C" fn(tensor: RawTensor, median: c_double, sigma: c_double) -> RawTensor,

    // -- nn modules ----------------------------------------------------------
    pub nn_elu_ctor: unsafe extern "C" fn(boxed: *mut RawModule) -> RawModule,
    pub nn_elu_forward: unsafe extern "C" fn(module: RawModule, tensor: RawTensor) -> RawTensor,
    pub nn_sigmoid_ctor: unsafe extern "C" fn(boxed: *mut RawModule) -> RawModule,
    pub nn_sigmoid_forward: unsafe extern "C" fn(module: RawModule, tensor: RawTensor) -> RawTensor,
    pub nn_tanh_ctor: unsafe extern "C" fn(boxed: *mut RawModule) -> RawModule,
    pub nn_tanh_forward: unsafe extern "C" fn(module: RawModule, tensor: RawTensor) -> RawTensor,
    pub nn_softmax_ctor: unsafe extern "C" fn(dim: i64, boxed: *mut RawModule) -> RawModule,
    pub nn_softmax_forward: unsafe extern "C" fn(module: RawModule, tensor: RawTensor) -> RawTensor,
    pub nn_module_dispose: unsafe extern "C" fn(module: RawModule),
    pub nn_boxed_module_dispose: unsafe extern "C" fn(module: RawModule),
}

fn sym<T: Copy>(lib: &Library, name: &'static [u8]) -> Result<T, SysError> {
    // SAFETY: the caller pairs each symbol name with the signature the native
    // header declares for it; resolution itself invokes nothing.
    let resolved = unsafe { lib.get::<T>(name) }.map_err(|err| SysError::MissingSymbol {
        symbol: String::from_utf8_lossy(&name[..name.len() - 1]).into_owned(),
        detail: err.to_string(),
    })?;
    Ok(*resolved)
}

impl TorchApi {
    /// Resolve every entry point from `lib`. Any missing symbol fails the
    /// whole load; a partially resolved table is never produced.
    pub(crate) fn resolve(lib: &Library) -> Result<Self, SysError> {
        Ok(TorchApi {
            manual_seed: sym(lib, b"THSTorch_manual_seed\0")?,
            cuda_is_available: sym(lib, b"THSTorchCuda_is_available\0")?,
            cuda_cudnn_is_available: sym(lib, b"THSTorchCuda_cudnn_is_available\0")?,
            cuda_device_count: sym(lib, b"THSTorchCuda_device_count\0")?,
            get_and_reset_last_err: sym(lib, b"THSTorch_get_and_reset_last_err\0")?,

            int8_to_scalar: sym(lib, b"THSTorch_int8_to_scalar\0")?,
            uint8_to_scalar: sym(lib, b"THSTorch_uint8_to_scalar\0")?,
            int16_to_scalar: sym(lib, b"THSTorch_int16_to_scalar\0")?,
            int32_to_scalar: sym(lib, b"THSTorch_int32_to_scalar\0")?,
            int64_to_scalar: sym(lib, b"THSTorch_int64_to_scalar\0")?,
            float32_to_scalar: sym(lib, b"THSTorch_float32_to_scalar\0")?,
            float64_to_scalar: sym(lib, b"THSTorch_float64_to_scalar\0")?,
            bool_to_scalar: sym(lib, b"THSTorch_bool_to_scalar\0")?,
            float16_to_scalar: sym(lib, b"THSTorch_float16_to_scalar\0")?,
            bfloat16_to_scalar: sym(lib, b"THSTorch_bfloat16_to_scalar\0")?,
            scalar_to_int8: sym(lib, b"THSTorch_scalar_to_int8\0")?,
            scalar_to_uint8: sym(lib, b"THSTorch_scalar_to_uint8\0")?,
            scalar_to_int16: sym(lib, b"THSTorch_scalar_to_int16\0")?,
            scalar_to_int32: sym(lib, b"THSTorch_scalar_to_int32\0")?,
            scalar_to_int64: sym(lib, b"THSTorch_scalar_to_int64\0")?,
            scalar_to_float32: sym(lib, b"THSTorch_scalar_to_float32\0")?,
            scalar_to_float64: sym(lib, b"THSTorch_scalar_to_float64\0")?,
            scalar_to_bool: sym(lib, b"THSTorch_scalar_to_bool\0")?,
            dispose_scalar: sym(lib, b"THSTorch_dispose_scalar\0")?,

            dispose: sym(lib, b"THSTensor_dispose\0")?,
            ndimension: sym(lib, b"THSTensor_ndimension\0")?,
            numel: sym(lib, b"THSTensor_numel\0")?,
            element_size: sym(lib, b"THSTensor_element_size\0")?,
            size: sym(lib, b"THSTensor_size\0")?,
            stride: sym(lib, b"THSTensor_stride\0")?,
            scalar_type: sym(lib, b"THSTensor_type\0")?,
            device_str: sym(lib, b"THSTensor_device_str\0")?,
            device_type: sym(lib, b"THSTensor_device_type\0")?,
            device_index: sym(lib, b"THSTensor_device_index\0")?,
            is_sparse: sym(lib, b"THSTensor_is_sparse\0")?,
            requires_grad: sym(lib, b"THSTensor_requires_grad\0")?,
            set_requires_grad: sym(lib, b"THSTensor_set_requires_grad\0")?,
            data: sym(lib, b"THSTensor_data\0")?,
            data_idx_float16: sym(lib, b"THSTensor_data_idx_float16\0")?,
            data_idx_bfloat16: sym(lib, b"THSTensor_data_idx_bfloat16\0")?,
            item: sym(lib, b"THSTensor_item\0")?,
            fill_: sym(lib, b"THSTensor_fill_\0")?,
            get1: sym(lib, b"THSTensor_get1\0")?,
            get2: sym(lib, b"THSTensor_get2\0")?,
            get3: sym(lib, b"THSTensor_get3\0")?,
            get4: sym(lib, b"THSTensor_get4\0")?,
            get5: sym(lib, b"THSTensor_get5\0")?,
            get6: sym(lib, b"THSTensor_get6\0")?,
            set1: sym(lib, b"THSTensor_set1\0")?,
            set2: sym(lib, b"THSTensor_set2\0")?,
            set3: sym(lib, b"THSTensor_set3\0")?,
            set4: sym(lib, b"THSTensor_set4\0")?,
            set5: sym(lib, b"THSTensor_set5\0")?,
            set6: sym(lib, b"THSTensor_set6\0")?,
            backward: sym(lib, b"THSTensor_backward\0")?,
            grad: sym(lib, b"THSTensor_grad\0")?,
            cpu: sym(lib, b"THSTensor_cpu\0")?,
            cuda: sym(lib, b"THSTensor_cuda\0")?,
            to_device: sym(lib, b"THSTensor_to_device\0")?,
            to_type: sym(lib, b"THSTensor_to_type\0")?,
            clone: sym(lib, b"THSTensor_clone\0")?,
            contiguous: sym(lib, b"THSTensor_contiguous\0")?,
            equal: sym(lib, b"THSTensor_equal\0")?,
            allclose: sym(lib, b"THSTensor_allclose\0")?,
            save: sym(lib, b"THSTensor_save\0")?,
            load: sym(lib, b"THSTensor_load\0")?,
            load_into: sym(lib, b"THSTensor_loadInto\0")?,

            new: sym(lib, b"THSTensor_new\0")?,
            zeros: sym(lib, b"THSTensor_zeros\0")?,
            ones: sym(lib, b"THSTensor_ones\0")?,
            empty: sym(lib, b"THSTensor_empty\0")?,
            full: sym(lib, b"THSTensor_full\0")?,
            arange: sym(lib, b"THSTensor_arange\0")?,
            rand: sym(lib, b"THSTensor_rand\0")?,
            randn: sym(lib, b"THSTensor_randn\0")?,
            randint: sym(lib, b"THSTensor_randint\0")?,
            randperm: sym(lib, b"THSTensor_randperm\0")?,

            add: sym(lib, b"THSTensor_add\0")?,
            add_: sym(lib, b"THSTensor_add_\0")?,
            add_scalar: sym(lib, b"THSTensor_add_scalar\0")?,
            add_scalar_: sym(lib, b"THSTensor_add_scalar_\0")?,
            sub: sym(lib, b"THSTensor_sub\0")?,
            sub_: sym(lib, b"THSTensor_sub_\0")?,
            sub_scalar: sym(lib, b"THSTensor_sub_scalar\0")?,
            sub_scalar_: sym(lib, b"THSTensor_sub_scalar_\0")?,
            mul: sym(lib, b"THSTensor_mul\0")?,
            mul_: sym(lib, b"THSTensor_mul_\0")?,
            mul_scalar: sym(lib, b"THSTensor_mul_scalar\0")?,
            mul_scalar_: sym(lib, b"THSTensor_mul_scalar_\0")?,
            div: sym(lib, b"THSTensor_div\0")?,
            div_: sym(lib, b"THSTensor_div_\0")?,
            div_scalar: sym(lib, b"THSTensor_div_scalar\0")?,
            div_scalar_: sym(lib, b"THSTensor_div_scalar_\0")?,
            fmod: sym(lib, b"THSTensor_fmod\0")?,
            fmod_scalar: sym(lib, b"THSTensor_fmod_scalar\0")?,
            remainder: sym(lib, b"THSTensor_remainder\0")?,
            remainder_scalar: sym(lib, b"THSTensor_remainder_scalar\0")?,
            pow: sym(lib, b"THSTensor_pow\0")?,
            pow_: sym(lib, b"THSTensor_pow_\0")?,
            pow_scalar: sym(lib, b"THSTensor_pow_scalar\0")?,
            pow_scalar_: sym(lib, b"THSTensor_pow_scalar_\0")?,
            neg: sym(lib, b"THSTensor_neg\0")?,
            neg_: sym(lib, b"THSTensor_neg_\0")?,
            abs: sym(lib, b"THSTensor_abs\0")?,
            abs_: sym(lib, b"THSTensor_abs_\0")?,
            atan2: sym(lib, b"THSTensor_atan2\0")?,
            max_elementwise: sym(lib, b"THSTensor_max_elementwise\0")?,
            min_elementwise: sym(lib, b"THSTensor_min_elementwise\0")?,
            addcmul: sym(lib, b"THSTensor_addcmul\0")?,
            addcdiv: sym(lib, b"THSTensor_addcdiv\0")?,
            mm: sym(lib, b"THSTensor_mm\0")?,
            bmm: sym(lib, b"THSTensor_bmm\0")?,
            matmul: sym(lib, b"THSTensor_matmul\0")?,
            addmm: sym(lib, b"THSTensor_addmm\0")?,
            einsum: sym(lib, b"THSTensor_einsum\0")?,

            exp: sym(lib, b"THSTensor_exp\0")?,
            exp_: sym(lib, b"THSTensor_exp_\0")?,
            expm1: sym(lib, b"THSTensor_expm1\0")?,
            log: sym(lib, b"THSTensor_log\0")?,
            log_: sym(lib, b"THSTensor_log_\0")?,
            log10: sym(lib, b"THSTensor_log10\0")?,
            log1p: sym(lib, b"THSTensor_log1p\0")?,
            sqrt: sym(lib, b"THSTensor_sqrt\0")?,
            sqrt_: sym(lib, b"THSTensor_sqrt_\0")?,
            rsqrt: sym(lib, b"THSTensor_rsqrt\0")?,
            sin: sym(lib, b"THSTensor_sin\0")?,
            sin_: sym(lib, b"THSTensor_sin_\0")?,
            cos: sym(lib, b"THSTensor_cos\0")?,
            cos_: sym(lib, b"THSTensor_cos_\0")?,
            tan: sym(lib, b"THSTensor_tan\0")?,
            tan_: sym(lib, b"THSTensor_tan_\0")?,
            asin: sym(lib, b"THSTensor_asin\0")?,
            acos: sym(lib, b"THSTensor_acos\0")?,
            atan: sym(lib, b"THSTensor_atan\0")?,
            sinh: sym(lib, b"THSTensor_sinh\0")?,
            cosh: sym(lib, b"THSTensor_cosh\0")?,
            tanh: sym(lib, b"THSTensor_tanh\0")?,
            tanh_: sym(lib, b"THSTensor_tanh_\0")?,
            ceil: sym(lib, b"THSTensor_ceil\0")?,
            ceil_: sym(lib, b"THSTensor_ceil_\0")?,
            floor: sym(lib, b"THSTensor_floor\0")?,
            floor_: sym(lib, b"THSTensor_floor_\0")?,
            round: sym(lib, b"THSTensor_round\0")?,
            round_: sym(lib, b"THSTensor_round_\0")?,
            frac: sym(lib, b"THSTensor_frac\0")?,
            sign: sym(lib, b"THSTensor_sign\0")?,
            sign_: sym(lib, b"THSTensor_sign_\0")?,
            erf: sym(lib, b"THSTensor_erf\0")?,
            erfc: sym(lib, b"THSTensor_erfc\0")?,
            erfinv: sym(lib, b"THSTensor_erfinv\0")?,
            lgamma: sym(lib, b"THSTensor_lgamma\0")?,

            eq: sym(lib, b"THSTensor_eq\0")?,
            ne: sym(lib, b"THSTensor_ne\0")?,
            lt: sym(lib, b"THSTensor_lt\0")?,
            le: sym(lib, b"THSTensor_le\0")?,
            gt: sym(lib, b"THSTensor_gt\0")?,
            ge: sym(lib, b"THSTensor_ge\0")?,
            eq_scalar: sym(lib, b"THSTensor_eq_scalar\0")?,
            ne_scalar: sym(lib, b"THSTensor_ne_scalar\0")?,
            lt_scalar: sym(lib, b"THSTensor_lt_scalar\0")?,
            le_scalar: sym(lib, b"THSTensor_le_scalar\0")?,
            gt_scalar: sym(lib, b"THSTensor_gt_scalar\0")?,
            ge_scalar: sym(lib, b"THSTensor_ge_scalar\0")?,
            logical_and: sym(lib, b"THSTensor_logical_and\0")?,
            logical_or: sym(lib, b"THSTensor_logical_or\0")?,
            logical_xor: sym(lib, b"THSTensor_logical_xor\0")?,
            logical_not: sym(lib, b"THSTensor_logical_not\0")?,
            bitwise_and: sym(lib, b"THSTensor_bitwise_and\0")?,
            bitwise_or: sym(lib, b"THSTensor_bitwise_or\0")?,
            bitwise_xor: sym(lib, b"THSTensor_bitwise_xor\0")?,
            bitwise_not: sym(lib, b"THSTensor_bitwise_not\0")?,
            clamp: sym(lib, b"THSTensor_clamp\0")?,
            clamp_min: sym(lib, b"THSTensor_clamp_min\0")?,
            clamp_max: sym(lib, b"THSTensor_clamp_max\0")?,

            sum: sym(lib, b"THSTensor_sum\0")?,
            sum_along_dimensions: sym(lib, b"THSTensor_sum_along_dimensions\0")?,
            mean: sym(lib, b"THSTensor_mean\0")?,
            mean_along_dimensions: sym(lib, b"THSTensor_mean_along_dimensions\0")?,
            max: sym(lib, b"THSTensor_max\0")?,
            min: sym(lib, b"THSTensor_min\0")?,
            median: sym(lib, b"THSTensor_median\0")?,
            max_along_dimension: sym(lib, b"THSTensor_max_along_dimension\0")?,
            min_along_dimension: sym(lib, b"THSTensor_min_along_dimension\0")?,
            argmax: sym(lib, b"THSTensor_argmax\0")?,
            argmax_along_dimension: sym(lib, b"THSTensor_argmax_along_dimension\0")?,
            argmin: sym(lib, b"THSTensor_argmin\0")?,
            argmin_along_dimension: sym(lib, b"THSTensor_argmin_along_dimension\0")?,
            all: sym(lib, b"THSTensor_all\0")?,
            all_along_dimension: sym(lib, b"THSTensor_all_along_dimension\0")?,
            any: sym(lib, b"THSTensor_any\0")?,
            any_along_dimension: sym(lib, b"THSTensor_any_along_dimension\0")?,
            norm: sym(lib, b"THSTensor_norm\0")?,
            norm_along_dimension: sym(lib, b"THSTensor_norm_along_dimension\0")?,
            cumsum: sym(lib, b"THSTensor_cumsum\0")?,
            cumprod: sym(lib, b"THSTensor_cumprod\0")?,
            cummax: sym(lib, b"THSTensor_cummax\0")?,
            cummin: sym(lib, b"THSTensor_cummin\0")?,
            logcumsumexp: sym(lib, b"THSTensor_logcumsumexp\0")?,
            bincount: sym(lib, b"THSTensor_bincount\0")?,
            topk: sym(lib, b"THSTensor_topk\0")?,

            reshape: sym(lib, b"THSTensor_reshape\0")?,
            view: sym(lib, b"THSTensor_view\0")?,
            expand: sym(lib, b"THSTensor_expand\0")?,
            permute: sym(lib, b"THSTensor_permute\0")?,
            flip: sym(lib, b"THSTensor_flip\0")?,
            transpose: sym(lib, b"THSTensor_transpose\0")?,
            transpose_: sym(lib, b"THSTensor_transpose_\0")?,
            t: sym(lib, b"THSTensor_t\0")?,
            squeeze: sym(lib, b"THSTensor_squeeze\0")?,
            unsqueeze: sym(lib, b"THSTensor_unsqueeze\0")?,
            narrow: sym(lib, b"THSTensor_narrow\0")?,
            slice: sym(lib, b"THSTensor_slice\0")?,
            unbind: sym(lib, b"THSTensor_unbind\0")?,
            split_with_size: sym(lib, b"THSTensor_split_with_size\0")?,
            split_with_sizes: sym(lib, b"THSTensor_split_with_sizes\0")?,
            cat: sym(lib, b"THSTensor_cat\0")?,
            stack: sym(lib, b"THSTensor_stack\0")?,

            index_select: sym(lib, b"THSTensor_index_select\0")?,
            index_fill: sym(lib, b"THSTensor_index_fill\0")?,
            gather: sym(lib, b"THSTensor_gather\0")?,
            scatter: sym(lib, b"THSTensor_scatter\0")?,

            relu: sym(lib, b"THSTensor_relu\0")?,
            relu_: sym(lib, b"THSTensor_relu_\0")?,
            relu6: sym(lib, b"THSTensor_relu6\0")?,
            relu6_: sym(lib, b"THSTensor_relu6_\0")?,
            elu: sym(lib, b"THSTensor_elu\0")?,
            elu_: sym(lib, b"THSTensor_elu_\0")?,
            celu: sym(lib, b"THSTensor_celu\0")?,
            celu_: sym(lib, b"THSTensor_celu_\0")?,
            selu: sym(lib, b"THSTensor_selu\0")?,
            selu_: sym(lib, b"THSTensor_selu_\0")?,
            gelu: sym(lib, b"THSTensor_gelu\0")?,
            sigmoid: sym(lib, b"THSTensor_sigmoid\0")?,
            sigmoid_: sym(lib, b"THSTensor_sigmoid_\0")?,
            silu: sym(lib, b"THSTensor_silu\0")?,
            silu_: sym(lib, b"THSTensor_silu_\0")?,
            softplus: sym(lib, b"THSTensor_softplus\0")?,
            leaky_relu: sym(lib, b"THSTensor_leaky_relu\0")?,
            leaky_relu_: sym(lib, b"THSTensor_leaky_relu_\0")?,
            hardsigmoid: sym(lib, b"THSTensor_hardsigmoid\0")?,
            hardsigmoid_: sym(lib, b"THSTensor_hardsigmoid_\0")?,
            hardswish: sym(lib, b"THSTensor_hardswish\0")?,
            hardswish_: sym(lib, b"THSTensor_hardswish_\0")?,
            hardtanh: sym(lib, b"THSTensor_hardtanh\0")?,
            hardtanh_: sym(lib, b"THSTensor_hardtanh_\0")?,
            log_sigmoid: sym(lib, b"THSTensor_log_sigmoid\0")?,
            prelu: sym(lib, b"THSTensor_prelu\0")?,

            conv1d: sym(lib, b"THSTensor_conv1d\0")?,
            conv2d: sym(lib, b"THSTensor_conv2d\0")?,
            conv3d: sym(lib, b"THSTensor_conv3d\0")?,
            conv_transpose1d: sym(lib, b"THSTensor_conv_transpose1d\0")?,
            conv_transpose2d: sym(lib, b"THSTensor_conv_transpose2d\0")?,
            conv_transpose3d: sym(lib, b"THSTensor_conv_transpose3d\0")?,

            max_pool1d: sym(lib, b"THSTensor_max_pool1d\0")?,
            max_pool2d: sym(lib, b"THSTensor_max_pool2d\0")?,
            max_pool3d: sym(lib, b"THSTensor_max_pool3d\0")?,
            max_pool1d_with_indices: sym(lib, b"THSTensor_max_pool1d_with_indices\0")?,
            max_pool2d_with_indices: sym(lib, b"THSTensor_max_pool2d_with_indices\0")?,
            max_pool3d_with_indices: sym(lib, b"THSTensor_max_pool3d_with_indices\0")?,
            maxunpool2d: sym(lib, b"THSTensor_maxunpool2d\0")?,
            maxunpool3d: sym(lib, b"THSTensor_maxunpool3d\0")?,
            avg_pool1d: sym(lib, b"THSTensor_avg_pool1d\0")?,
            avg_pool2d: sym(lib, b"THSTensor_avg_pool2d\0")?,
            avg_pool3d: sym(lib, b"THSTensor_avg_pool3d\0")?,
            adaptive_avg_pool1d: sym(lib, b"THSTensor_adaptive_avg_pool1d\0")?,
            adaptive_avg_pool2d: sym(lib, b"THSTensor_adaptive_avg_pool2d\0")?,
            adaptive_avg_pool3d: sym(lib, b"THSTensor_adaptive_avg_pool3d\0")?,

            upsample_nearest1d: sym(lib, b"THSTensor_upsample_nearest1d\0")?,
            upsample_nearest2d: sym(lib, b"THSTensor_upsample_nearest2d\0")?,
            upsample_nearest3d: sym(lib, b"THSTensor_upsample_nearest3d\0")?,

            fft: sym(lib, b"THSTensor_fft\0")?,
            ifft: sym(lib, b"THSTensor_ifft\0")?,
            rfft: sym(lib, b"THSTensor_rfft\0")?,
            irfft: sym(lib, b"THSTensor_irfft\0")?,

            bernoulli: sym(lib, b"THSTensor_bernoulli\0")?,
            bernoulli_: sym(lib, b"THSTensor_bernoulli_\0")?,
            multinomial: sym(lib, b"THSTensor_multinomial\0")?,
            uniform_: sym(lib, b"THSTensor_uniform_\0")?,
            normal_: sym(lib, b"THSTensor_normal_\0")?,
            log_normal_: sym(lib, b"THSTensor_log_normal_\0")?,
            exponential_: sym(lib, b"THSTensor_exponential_\0")?,
            geometric_: sym(lib, b"THSTensor_geometric_\0")?,
            cauchy_: sym(lib, b"THSTensor_cauchy_\0")?,

            nn_elu_ctor: sym(lib, b"THSNN_ELU_ctor\0")?,
            nn_elu_forward: sym(lib, b"THSNN_ELU_forward\0")?,
            nn_sigmoid_ctor: sym(lib, b"THSNN_Sigmoid_ctor\0")?,
            nn_sigmoid_forward: sym(lib, b"THSNN_Sigmoid_forward\0")?,
            nn_tanh_ctor: sym(lib, b"THSNN_Tanh_ctor\0")?,
            nn_tanh_forward: sym(lib, b"THSNN_Tanh_forward\0")?,
            nn_softmax_ctor: sym(lib, b"THSNN_SoftMax_ctor\0")?,
            nn_softmax_forward: sym(lib, b"THSNN_SoftMax_forward\0")?,
            nn_module_dispose: sym(lib, b"THSNN_Module_dispose\0")?,
            nn_boxed_module_dispose: sym(lib, b"THSNN_BoxedModule_dispose\0")?,
        })
    }
}
