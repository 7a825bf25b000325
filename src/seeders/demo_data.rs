use crate::models::seed_model::{AuthorData, CategoryData, PostData, SeedData, TagData};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// The built-in sample blog: 2 authors, 3 categories, 5 tags, 8 posts.
/// Post relations are expressed by slug so they survive any reordering of
/// the reference arrays.
pub fn sample_content() -> SeedData {
    SeedData {
        authors: vec![
            AuthorData {
                name: "John Doe".to_string(),
                slug: Some("john-doe".to_string()),
                email: "john@example.com".to_string(),
                bio: Some("Full-stack developer and technical writer".to_string()),
            },
            AuthorData {
                name: "Jane Smith".to_string(),
                slug: Some("jane-smith".to_string()),
                email: "jane@example.com".to_string(),
                bio: Some("UX designer and content strategist".to_string()),
            },
        ],
        categories: vec![
            CategoryData {
                name: "Technology".to_string(),
                slug: Some("technology".to_string()),
                description: Some("Latest tech trends and tutorials".to_string()),
            },
            CategoryData {
                name: "Design".to_string(),
                slug: Some("design".to_string()),
                description: Some("UI/UX and visual design articles".to_string()),
            },
            CategoryData {
                name: "Business".to_string(),
                slug: Some("business".to_string()),
                description: Some("Startup and entrepreneurship content".to_string()),
            },
        ],
        tags: vec![
            TagData {
                name: "JavaScript".to_string(),
                slug: Some("java-script".to_string()),
            },
            TagData {
                name: "React".to_string(),
                slug: Some("react".to_string()),
            },
            TagData {
                name: "TypeScript".to_string(),
                slug: Some("type-script".to_string()),
            },
            TagData {
                name: "Next.js".to_string(),
                slug: Some("next-js".to_string()),
            },
            TagData {
                name: "css".to_string(),
                slug: Some("css".to_string()),
            },
        ],
        posts: vec![
            PostData {
                title: "Modern CSS Techniques for 2024".to_string(),
                slug: Some("modern-css-techniques".to_string()),
                cover_image_url: Some("/uploads/css_55e24b692f.png".to_string()),
                content: r#"# Modern CSS Techniques for 2024

CSS has evolved dramatically. Let's explore the modern techniques every developer should know.

## CSS Grid

CSS Grid has transformed layout design. Unlike Flexbox, Grid allows you to work in two dimensions:

```css
.container {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}
```

## Container Queries

Container queries allow components to respond to their container's size rather than the viewport.

## The :has() Selector

This powerful pseudo-class finally allows parent selection.

## Conclusion

Modern CSS provides powerful tools for creating beautiful, responsive websites. Stay updated with these techniques!"#
                    .to_string(),
                published_date: date(2025, 9, 25),
                author: "jane-smith".to_string(),
                category: "design".to_string(),
                tags: vec!["css".to_string()],
            },
            PostData {
                title: "Getting Started with Next.js 14".to_string(),
                slug: Some("getting-started-nextjs-14".to_string()),
                cover_image_url: Some("/uploads/nextjs_7084db26e3.png".to_string()),
                content: r#"# Getting Started with Next.js 14

Next.js 14 brings exciting new features that make building React applications faster and more efficient than ever before.

## What's New

- **Turbopack**: The new bundler that's significantly faster than Webpack
- **Server Actions**: Simplified data mutations without API routes
- **Partial Prerendering**: Combine static and dynamic content seamlessly

## Quick Setup

```bash
npx create-next-app@latest my-app
cd my-app
npm run dev
```

## Conclusion

Next.js 14 represents a major leap forward in web development. Start building today!"#
                    .to_string(),
                published_date: date(2025, 10, 29),
                author: "john-doe".to_string(),
                category: "technology".to_string(),
                tags: vec![
                    "java-script".to_string(),
                    "next-js".to_string(),
                    "react".to_string(),
                ],
            },
            PostData {
                title: "TypeScript Best Practices for React Developers".to_string(),
                slug: Some("typescript-best-practices-react".to_string()),
                cover_image_url: Some("/uploads/typ_04f4420b5a.webp".to_string()),
                content: r#"# TypeScript Best Practices for React

TypeScript has become the standard for modern React development. Here's how to use it effectively.

## Typing Props

Always define explicit types for component props:

```typescript
interface ButtonProps {
  label: string;
  onClick: () => void;
  variant?: 'primary' | 'secondary';
}
```

## Utility Types

Leverage TypeScript's built-in utilities like `Pick`, `Omit` and `Partial`.

## Avoid 'any'

Use `unknown` instead of `any` for better type safety.

## Conclusion

These practices will help you write better, safer code."#
                    .to_string(),
                published_date: date(2024, 8, 13),
                author: "john-doe".to_string(),
                category: "technology".to_string(),
                tags: vec![
                    "java-script".to_string(),
                    "type-script".to_string(),
                    "react".to_string(),
                ],
            },
            PostData {
                title: "Building Responsive Layouts with Tailwind CSS".to_string(),
                slug: Some("building-responsive-layouts".to_string()),
                cover_image_url: Some("/uploads/tailwind_58f54783cf.webp".to_string()),
                content: r#"# Building Responsive Layouts with Tailwind CSS

Tailwind CSS makes building responsive layouts incredibly efficient with its utility-first approach.

## Mobile-First Design

Tailwind uses a mobile-first breakpoint system:

```html
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
  <!-- Content -->
</div>
```

## Breakpoints

`sm` 640px, `md` 768px, `lg` 1024px, `xl` 1280px, `2xl` 1536px.

## Conclusion

Tailwind CSS simplifies responsive design with its intuitive utility classes."#
                    .to_string(),
                published_date: date(2024, 7, 22),
                author: "john-doe".to_string(),
                category: "design".to_string(),
                tags: vec![
                    "next-js".to_string(),
                    "react".to_string(),
                    "css".to_string(),
                ],
            },
            PostData {
                title: "React Performance Optimization Tips".to_string(),
                slug: Some("react-performance-optimization".to_string()),
                cover_image_url: Some(
                    "/uploads/React_Performance_Optimization_Techniques_0bf4828f5a_7c741bde17.jpg"
                        .to_string(),
                ),
                content: r#"# React Performance Optimization Tips

Learn how to make your React applications blazingly fast with these optimization techniques.

## Use React.memo

Prevent unnecessary re-renders of functional components.

## useMemo for Expensive Calculations

```typescript
const sortedData = useMemo(() => {
  return data.sort((a, b) => a.value - b.value);
}, [data]);
```

## Virtualize Long Lists

Use libraries like react-window for lists with thousands of rows.

## Conclusion

These optimization techniques will significantly improve your React app's performance."#
                    .to_string(),
                published_date: date(2025, 10, 4),
                author: "jane-smith".to_string(),
                category: "technology".to_string(),
                tags: vec!["java-script".to_string(), "react".to_string()],
            },
            PostData {
                title: "Essential UI/UX Design Principles".to_string(),
                slug: Some("essential-ui-ux-design-principles".to_string()),
                cover_image_url: Some("/uploads/1710764333477_666750b866.jpeg".to_string()),
                content: r#"# Essential UI/UX Design Principles

Great design is invisible. Here are the principles that make interfaces intuitive and delightful.

## Consistency

Use the same button styles, keep spacing uniform and maintain consistent typography.

## Visual Hierarchy

Guide users' attention with size, color, position and white space.

## Accessibility

Design for everyone: sufficient color contrast (WCAG AA: 4.5:1), keyboard navigation and clear focus indicators.

## Conclusion

These principles form the foundation of great UI/UX design."#
                    .to_string(),
                published_date: date(2025, 9, 30),
                author: "jane-smith".to_string(),
                category: "design".to_string(),
                tags: vec!["css".to_string()],
            },
            PostData {
                title: "JavaScript ES2024 Features You Should Know".to_string(),
                slug: Some("javascript-es2024-features".to_string()),
                cover_image_url: Some(
                    "/uploads/Amazing_new_Javascript_features_in_ES_15_af4d32ecf9.webp".to_string(),
                ),
                content: r#"# JavaScript ES2024 Features You Should Know

ES2024 brings exciting new features to JavaScript. Let's explore what's new!

## Array Grouping

```javascript
const grouped = Object.groupBy(products, item => item.category);
```

## Promise.withResolvers()

Cleaner promise creation without wrapping everything in an executor function.

## Temporal API (Stage 3)

Modern date/time handling is finally on the way.

## Conclusion

ES2024 continues to improve JavaScript with developer-friendly features."#
                    .to_string(),
                published_date: date(2025, 11, 1),
                author: "john-doe".to_string(),
                category: "technology".to_string(),
                tags: vec!["java-script".to_string()],
            },
            PostData {
                title: "Proven Startup Growth Strategies for 2024".to_string(),
                slug: Some("startup-growth-strategies-2024".to_string()),
                cover_image_url: Some("/uploads/Organic_growth_chart_e26ccef016.jpg".to_string()),
                content: r#"# Proven Startup Growth Strategies for 2024

Growing a startup requires strategy, execution, and persistence. Here are proven approaches that work.

## Product-Led Growth

Freemium models that showcase value, self-service onboarding and viral referral loops.

## Content Marketing

Educational blog posts, SEO-optimized content and case studies build authority and organic traffic.

## Data-Driven Iteration

Track key metrics (CAC, LTV, churn), A/B test everything and run regular cohort analysis.

## Conclusion

Successful startups combine multiple growth strategies and iterate based on what works."#
                    .to_string(),
                published_date: date(2024, 11, 6),
                author: "john-doe".to_string(),
                category: "business".to_string(),
                tags: vec!["java-script".to_string(), "react".to_string()],
            },
        ],
    }
}
