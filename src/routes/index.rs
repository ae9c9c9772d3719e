use axum::response::Html;

/// The upload form
///
/// A minimal single-page front end: image picker, dietary checkboxes,
/// cuisine select, and a download link for the generated recipes. Kept
/// inline so the server ships as one binary.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Fridge to Recipe</title>
    <style>
        body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #333; }
        h1 { text-align: center; }
        fieldset { border: 1px solid #ccc; border-radius: 8px; margin: 1rem 0; }
        label { margin-right: 1rem; }
        button { padding: 0.5rem 2rem; border: none; border-radius: 6px; background: #4ECDC4; color: white; font-weight: bold; cursor: pointer; }
        button:disabled { background: #aaa; }
        pre { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; border-radius: 8px; }
        .error { color: #c0392b; }
        #download { display: none; margin-left: 1rem; }
    </style>
</head>
<body>
    <h1>Fridge to Recipe</h1>
    <p>Upload a photo of your ingredients and get recipe suggestions.</p>

    <form id="form">
        <fieldset>
            <legend>Photo</legend>
            <input type="file" id="image" accept="image/jpeg,image/png,image/gif,image/webp" required>
        </fieldset>
        <fieldset>
            <legend>Dietary requirements</legend>
            <label><input type="checkbox" name="dietary" value="Vegetarian"> Vegetarian</label>
            <label><input type="checkbox" name="dietary" value="Vegan"> Vegan</label>
            <label><input type="checkbox" name="dietary" value="Gluten-Free"> Gluten-Free</label>
            <label><input type="checkbox" name="dietary" value="Dairy-Free"> Dairy-Free</label>
            <label><input type="checkbox" name="dietary" value="Keto"> Keto</label>
            <label><input type="checkbox" name="dietary" value="Low-Carb"> Low-Carb</label>
            <label><input type="checkbox" name="dietary" value="Nut-Free"> Nut-Free</label>
        </fieldset>
        <fieldset>
            <legend>Preferred cuisine</legend>
            <select id="cuisine">
                <option>Any</option>
                <option>Italian</option>
                <option>Asian</option>
                <option>Mexican</option>
                <option>Indian</option>
                <option>Mediterranean</option>
                <option>American</option>
                <option>French</option>
            </select>
        </fieldset>
        <button type="submit" id="submit">Identify Ingredients &amp; Get Recipes</button>
        <a id="download" download="my_recipes.txt">Download recipes</a>
    </form>

    <h2>Detected ingredients</h2>
    <pre id="ingredients">Upload an image to see results here.</pre>

    <h2>Recipe suggestions</h2>
    <pre id="recipes">Your personalized suggestions will appear here.</pre>

    <script>
        const form = document.getElementById('form');
        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            const file = document.getElementById('image').files[0];
            if (!file) return;

            const data = new FormData();
            data.append('image', file);
            const dietary = [...form.querySelectorAll('input[name=dietary]:checked')]
                .map(c => c.value).join(',');
            if (dietary) data.append('dietary', dietary);
            data.append('cuisine', document.getElementById('cuisine').value);

            const submit = document.getElementById('submit');
            submit.disabled = true;
            submit.textContent = 'Analyzing...';
            try {
                const res = await fetch('/api/analyze', { method: 'POST', body: data });
                const json = await res.json();
                if (!res.ok) throw new Error(json.error || 'Request failed');
                document.getElementById('ingredients').textContent = json.ingredients;
                document.getElementById('recipes').textContent = json.recipes;
                const link = document.getElementById('download');
                link.href = URL.createObjectURL(new Blob([json.recipes], { type: 'text/plain' }));
                link.style.display = 'inline';
            } catch (err) {
                document.getElementById('recipes').innerHTML =
                    '<span class="error"></span>';
                document.querySelector('.error').textContent = err.message;
            } finally {
                submit.disabled = false;
                submit.textContent = 'Identify Ingredients & Get Recipes';
            }
        });
    </script>
</body>
</html>
"#;
