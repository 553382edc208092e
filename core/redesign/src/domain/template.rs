//! 組み込みのリデザイン指示文（設定の template_file で差し替え可能）
//!
//! 末尾の既存コード見出しの直後にファイル群が連結される。

pub const STEM_REDESIGN_PROMPT: &str = "
You are a professional Flutter UI/UX designer. Please redesign the UI for this course editor (Builder). Requirements:

## Style requirements
1. **STEM tech feel**:
   - Use bright tech blue, electric green, and vibrant orange as primary colors
   - Add subtle grid background or circuit-board texture
   - Use geometric/tech style icons

2. **Bright and fresh**:
   - Use white and light gray as base backgrounds
   - High-contrast color combinations
   - Avoid dull/dark colors

3. **Modern**:
   - Larger corner radius (16px-24px)
   - Soft shadows
   - Subtle gradients
   - Glassmorphism effect (optional)

4. **Education-friendly**:
   - Clear visual hierarchy
   - Ample whitespace
   - Readable font sizes

## Output requirements
Output complete new code files:

1. **design_tokens.dart** - new design tokens (STEM color palette)
2. **theme.dart** - new theme configuration

Ensure:
- Keep compatibility with the existing code structure
- All color values use explicit hex values
- Add necessary comments to explain design intent

## Existing code

Here are the current code files. Please redesign based on these:

";
