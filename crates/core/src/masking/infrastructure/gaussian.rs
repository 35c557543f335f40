use crate::shared::region::Region;

/// Odd kernel size whose derived sigma (`size / 6`) matches a blur radius.
pub fn kernel_size_for_sigma(sigma: f64) -> usize {
    ((sigma * 6.0).ceil() as usize).max(1) | 1
}

/// Precompute a normalised 1D Gaussian kernel of the given size.
///
/// `kernel_size` must be odd and >= 1. Sigma is derived as `kernel_size / 6.0`.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let mut kernel_f64: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Separable Gaussian blur over an interleaved buffer, reusing `temp`.
///
/// Samples past the buffer edge clamp to the nearest edge pixel.
pub fn separable_gaussian_blur_with_kernel(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = kernel_size / 2;

    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data -> temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half as isize)
                        .clamp(0, (width - 1) as isize) as usize;
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp -> data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half as isize)
                        .clamp(0, (height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Copy `rect` out of a frame buffer into an isolated, reusable buffer.
pub fn extract_roi(
    data: &[u8],
    frame_width: usize,
    channels: usize,
    rect: &Region,
    roi: &mut Vec<u8>,
) {
    let (rx, ry, rw, rh) = (
        rect.x as usize,
        rect.y as usize,
        rect.width as usize,
        rect.height as usize,
    );
    roi.resize(rw * rh * channels, 0);
    for row in 0..rh {
        let src_offset = ((ry + row) * frame_width + rx) * channels;
        let dst_offset = row * rw * channels;
        roi[dst_offset..dst_offset + rw * channels]
            .copy_from_slice(&data[src_offset..src_offset + rw * channels]);
    }
}

/// Draw an isolated ROI buffer back over `rect`.
pub fn write_roi_back(
    data: &mut [u8],
    roi: &[u8],
    frame_width: usize,
    channels: usize,
    rect: &Region,
) {
    let (rx, ry, rw, rh) = (
        rect.x as usize,
        rect.y as usize,
        rect.width as usize,
        rect.height as usize,
    );
    for row in 0..rh {
        let dst_offset = ((ry + row) * frame_width + rx) * channels;
        let src_offset = row * rw * channels;
        data[dst_offset..dst_offset + rw * channels]
            .copy_from_slice(&roi[src_offset..src_offset + rw * channels]);
    }
}
