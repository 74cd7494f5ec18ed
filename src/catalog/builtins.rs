//! Built-in bookmarklets - the gallery's catalog content

use super::entry::SnippetEntry;

/// Every bookmarklet shipped with the gallery, in display order
pub fn builtin_snippets() -> Vec<SnippetEntry> {
    let mut catalog = Vec::new();

    // --- Page editing ---

    catalog.push(
        SnippetEntry::new(
            "editable",
            "Editable Toggle",
            "Toggle in-place editing of the page body.",
            r#"javascript:(() => {
    window.__editableToggleCount = window.__editableToggleCount || 0;
    const body = document.querySelector('body');
    body.contentEditable = (window.__editableToggleCount % 2 === 0) ? 'true' : 'false';
    window.__editableToggleCount++;
})();"#,
        )
        .with_category("editing")
        .with_tags(["toggle", "content"]),
    );

    catalog.push(
        SnippetEntry::new(
            "hitboxes",
            "Hitboxes Outline",
            "Prompt for a color and outline every element to show hitboxes.",
            r#"javascript:(() => {
    const id = 'hbx';
    const existing = document.getElementById(id);
    if (existing) { existing.remove(); return; }
    const color = prompt('Outline color? (e.g. red or #ff0000)');
    if (!color) return;
    const style = document.createElement('style');
    style.id = id;
    style.textContent = '* { outline: 2px solid ' + color + ' !important; }';
    document.head.appendChild(style);
})();"#,
        )
        .with_category("debugging")
        .with_tags(["layout", "css"]),
    );

    // --- Appearance ---

    catalog.push(
        SnippetEntry::new(
            "invert-colors",
            "Invert Colors",
            "Toggle color inversion while attempting to preserve images and media.",
            r#"javascript:(() => {
    const id = 'invert-colors-style';
    let style = document.getElementById(id);
    if (style) { style.remove(); return; }
    style = document.createElement('style'); style.id = id;
    style.textContent = [
        'html { filter: invert(1) hue-rotate(180deg); background: black !important; }',
        'img, video, iframe, picture, svg { filter: invert(1) hue-rotate(180deg) !important; }'
    ].join('\n');
    document.head.appendChild(style);
})();"#,
        )
        .with_category("appearance")
        .with_tags(["toggle", "accessibility"]),
    );

    catalog.push(
        SnippetEntry::new(
            "remove-styles",
            "Remove All Styles",
            "Strip all styling from the current page for better readability.",
            r#"javascript:(() => {
    const style = document.createElement('style');
    style.textContent = '* { all: revert !important; }';
    document.head.appendChild(style);
})();"#,
        )
        .with_category("appearance")
        .with_tags(["css", "reading"]),
    );

    catalog.push(
        SnippetEntry::new(
            "dark-mode",
            "Dark Mode",
            "Toggle dark mode for the current page.",
            r#"javascript:(() => {
    const style = document.createElement('style');
    style.id = 'dark-mode-style';
    style.textContent = 'html { filter: invert(1) hue-rotate(180deg) !important; background: #000 !important; } ' +
                       'img, video, iframe, svg { filter: invert(1) hue-rotate(180deg) !important; }';

    const existing = document.getElementById('dark-mode-style');
    if (existing) {
        existing.remove();
    } else {
        document.head.appendChild(style);
    }
})();"#,
        )
        .with_category("appearance")
        .with_tags(["toggle", "theme"]),
    );

    // --- Forms & data ---

    catalog.push(
        SnippetEntry::new(
            "show-password",
            "Show Passwords",
            "Toggle password fields to show their contents.",
            r#"javascript:(() => {
    const inputs = document.querySelectorAll('input[type=password]');
    inputs.forEach(input => {
        input.type = input.type === 'password' ? 'text' : 'password';
    });
})();"#,
        )
        .with_category("forms")
        .with_tags(["toggle", "password"]),
    );

    catalog.push(
        SnippetEntry::new(
            "table-to-csv",
            "Table to CSV",
            "Convert HTML tables to CSV format that can be copied to clipboard.",
            r#"javascript:(() => {
    const tables = document.querySelectorAll('table');
    if (tables.length === 0) {
        alert('No tables found on this page.');
        return;
    }

    let csvContent = '';
    tables.forEach((table, index) => {
        const rows = table.querySelectorAll('tr');
        const csv = [];

        rows.forEach(row => {
            const rowData = [];
            const cells = row.querySelectorAll('th, td');

            cells.forEach(cell => {
                rowData.push('"' + cell.innerText.replace(/"/g, '""') + '"');
            });

            csv.push(rowData.join(','));
        });

        csvContent += 'Table ' + (index + 1) + ':\n' + csv.join('\n') + '\n\n';
    });

    navigator.clipboard.writeText(csvContent).then(() => {
        alert('Table(s) copied as CSV to clipboard!');
    }).catch(() => {
        prompt('Copy the following CSV:', csvContent);
    });
})();"#,
        )
        .with_category("data")
        .with_tags(["export", "clipboard"]),
    );

    // --- Inspection ---

    catalog.push(
        SnippetEntry::new(
            "find-images",
            "Find Large Images",
            "Highlight and list all images larger than a specified size.",
            r#"javascript:(() => {
    const minSize = prompt('Minimum image size in KB?', '100');
    if (!minSize) return;
    const size = parseInt(minSize) * 1024;
    const images = Array.from(document.images).filter(img => img.naturalWidth * img.naturalHeight > 0);

    images.forEach(img => {
        if (img.src && img.naturalWidth * img.naturalHeight > size) {
            img.style.outline = '4px solid #ff0000';
            img.style.boxShadow = '0 0 10px #ff0000';
        }
    });

    alert('Found ' + images.length + ' images. Large images are highlighted in red.');
})();"#,
        )
        .with_category("inspection")
        .with_tags(["images", "performance"]),
    );

    catalog.push(
        SnippetEntry::new(
            "word-count",
            "Word Count",
            "Count and display the number of words on the page.",
            r#"javascript:(() => {
    const text = document.body.innerText;
    const wordCount = text.trim().split(/\s+/).length;
    alert('Word count: ' + wordCount);
})();"#,
        )
        .with_category("inspection")
        .with_tags(["text"]),
    );

    catalog.push(
        SnippetEntry::new(
            "view-source",
            "View Source",
            "View the page source in a new tab.",
            r#"javascript:(() => {
    const source = '<!DOCTYPE html><html><head><meta charset="utf-8"><title>Source: ' +
                  location.href + '</title><style>body{font-family:monospace;white-space:pre;margin:20px;}</style></head><body>' +
                  document.documentElement.outerHTML.replace(/</g, '&lt;').replace(/>/g, '&gt;') +
                  '</body></html>';
    const win = window.open('about:blank', '_blank');
    win.document.write(source);
})();"#,
        )
        .with_category("inspection")
        .with_tags(["html", "source"]),
    );

    // --- Navigation & cleanup ---

    catalog.push(
        SnippetEntry::new(
            "scroll-to-top",
            "Scroll to Top",
            "Smoothly scroll to the top of the page.",
            r#"javascript:(() => {
    window.scrollTo({ top: 0, behavior: 'smooth' });
})();"#,
        )
        .with_category("navigation")
        .with_tags(["scroll"]),
    );

    catalog.push(
        SnippetEntry::new(
            "remove-overlays",
            "Remove Overlays",
            "Remove popups, modals, and overlays that block content.",
            r#"javascript:(() => {
    const selectors = [
        '.overlay', '.modal', '.popup', '.lightbox',
        '[class*="overlay"]', '[class*="modal"]',
        '[class*="popup"]', '[class*="lightbox"]',
        '.ReactModal__Overlay', '.fancybox-overlay'
    ];

    selectors.forEach(selector => {
        document.querySelectorAll(selector).forEach(el => {
            el.style.display = 'none';
            el.remove();
        });
    });

    document.body.style.overflow = 'auto';
    document.body.style.position = 'static';
})();"#,
        )
        .with_category("cleanup")
        .with_tags(["popups", "reading"]),
    );

    catalog.push(
        SnippetEntry::new(
            "clear-storage",
            "Clear Storage",
            "Clear localStorage and sessionStorage for the current domain.",
            r#"javascript:(() => {
    if (confirm('Clear all local and session storage for this domain?')) {
        localStorage.clear();
        sessionStorage.clear();
        alert('Storage cleared!');
    }
})();"#,
        )
        .with_category("cleanup")
        .with_tags(["storage", "privacy"]),
    );

    catalog
}
